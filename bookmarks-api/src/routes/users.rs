/// Profile endpoints for the authenticated caller
///
/// - `GET /users/me` - Current user
/// - `PATCH /users` - Partial profile update

use crate::{app::AppState, error::ApiResult, extract::ValidatedJson};
use axum::{extract::State, Extension, Json};
use bookmarks_shared::{
    auth::middleware::AuthContext,
    models::user::{UpdateUser, User},
};
use serde::Deserialize;
use validator::Validate;

/// Profile edit request; omitted fields are left alone
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    #[validate(email(message = "email must be an email"))]
    pub email: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,
}

impl From<EditUserRequest> for UpdateUser {
    fn from(req: EditUserRequest) -> Self {
        UpdateUser {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

/// Returns the caller's profile
pub async fn get_me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<User>> {
    let user = state.users.get_me(auth.user_id).await?;
    Ok(Json(user))
}

/// Updates the caller's profile
///
/// # Errors
///
/// - `400 Bad Request`: Invalid email
/// - `403 Forbidden`: Email belongs to another account
pub async fn edit_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    ValidatedJson(req): ValidatedJson<EditUserRequest>,
) -> ApiResult<Json<User>> {
    let user = state.users.edit(auth.user_id, req.into()).await?;
    Ok(Json(user))
}
