/// Signup and signin
///
/// Passwords are hashed with Argon2id before they reach the store; successful
/// signup or signin returns a signed access token.
///
/// Signin never says which half of the credentials was wrong: an unknown email
/// and a bad password both produce
/// [`AuthServiceError::CredentialsIncorrect`].

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::{
    jwt::{self, Claims, JwtError},
    password::{self, PasswordError},
};
use crate::models::user::{CreateUser, User};
use crate::store::{StoreError, UserRepository};

/// Error type for signup/signin
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    /// Email already registered
    #[error("Credentials taken")]
    CredentialsTaken,

    /// Unknown email or wrong password
    #[error("Credentials incorrect")]
    CredentialsIncorrect,

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Token(#[from] JwtError),

    #[error(transparent)]
    Storage(StoreError),
}

impl From<StoreError> for AuthServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(_) => AuthServiceError::CredentialsTaken,
            other => AuthServiceError::Storage(other),
        }
    }
}

/// Email + plaintext password, as submitted by the client
#[derive(Debug, Clone)]
pub struct AuthCredentials {
    pub email: String,
    pub password: String,
}

/// Token handed back after signup/signin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
}

/// Account creation and token issuance
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    jwt_secret: Arc<str>,
    token_ttl: Duration,
}

impl AuthService {
    /// Creates the service
    ///
    /// `token_ttl` is the lifetime of every issued access token.
    pub fn new(
        users: Arc<dyn UserRepository>,
        jwt_secret: impl Into<Arc<str>>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            users,
            jwt_secret: jwt_secret.into(),
            token_ttl,
        }
    }

    /// Registers a new account and signs it in
    pub async fn signup(&self, credentials: AuthCredentials) -> Result<AccessToken, AuthServiceError> {
        let password_hash = password::hash_password(&credentials.password)?;

        let user = self
            .users
            .create_user(CreateUser {
                email: credentials.email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User signed up");
        self.sign_token(&user)
    }

    /// Checks credentials and issues a token
    pub async fn signin(&self, credentials: AuthCredentials) -> Result<AccessToken, AuthServiceError> {
        let Some(user) = self.users.find_user_by_email(&credentials.email).await? else {
            warn!("Signin with unknown email");
            return Err(AuthServiceError::CredentialsIncorrect);
        };

        if !password::verify_password(&credentials.password, &user.password_hash)? {
            warn!(user_id = %user.id, "Signin with wrong password");
            return Err(AuthServiceError::CredentialsIncorrect);
        }

        info!(user_id = %user.id, "User signed in");
        self.sign_token(&user)
    }

    fn sign_token(&self, user: &User) -> Result<AccessToken, AuthServiceError> {
        let claims = Claims::new(user.id, user.email.clone(), self.token_ttl);
        let access_token = jwt::create_token(&claims, &self.jwt_secret)?;
        Ok(AccessToken { access_token })
    }
}
