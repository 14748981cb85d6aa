/// Profile retrieval and editing for the signed-in user

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::models::user::{UpdateUser, User};
use crate::store::{StoreError, UserRepository};

/// Error type for profile operations
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// Token refers to a user that no longer exists
    #[error("User not found")]
    NotFound,

    /// New email belongs to another account
    #[error("Email already in use")]
    EmailTaken,

    #[error(transparent)]
    Storage(StoreError),
}

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(_) => UserError::EmailTaken,
            other => UserError::Storage(other),
        }
    }
}

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// The caller's own account
    pub async fn get_me(&self, user_id: Uuid) -> Result<User, UserError> {
        self.users
            .find_user_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound)
    }

    /// Partially updates the caller's profile
    ///
    /// An update with no fields set writes nothing and returns the profile
    /// as stored.
    pub async fn edit(&self, user_id: Uuid, data: UpdateUser) -> Result<User, UserError> {
        if data.is_empty() {
            return self.get_me(user_id).await;
        }

        let user = self
            .users
            .update_user(user_id, data)
            .await?
            .ok_or(UserError::NotFound)?;

        info!(user_id = %user_id, "Edited user profile");
        Ok(user)
    }
}
