/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /auth/signup` - Register a new user, returns an access token (201)
/// - `POST /auth/signin` - Exchange credentials for an access token (200)
///
/// Both take the same body:
///
/// ```json
/// { "email": "user@example.com", "password": "hunter2" }
/// ```
///
/// and answer with:
///
/// ```json
/// { "access_token": "eyJ..." }
/// ```

use crate::{app::AppState, error::ApiResult, extract::ValidatedJson};
use axum::{extract::State, http::StatusCode, Json};
use bookmarks_shared::service::auth::{AccessToken, AuthCredentials};
use serde::Deserialize;
use validator::Validate;

/// Signup/signin request
#[derive(Debug, Deserialize, Validate)]
pub struct AuthRequest {
    /// Email address
    #[validate(email(message = "email must be an email"))]
    pub email: String,

    /// Plaintext password
    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: String,
}

impl From<AuthRequest> for AuthCredentials {
    fn from(req: AuthRequest) -> Self {
        AuthCredentials {
            email: req.email,
            password: req.password,
        }
    }
}

/// Register a new user
///
/// # Errors
///
/// - `400 Bad Request`: Missing or invalid email/password
/// - `403 Forbidden`: Email already registered
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<AuthRequest>,
) -> ApiResult<(StatusCode, Json<AccessToken>)> {
    let token = state.auth.signup(req.into()).await?;
    Ok((StatusCode::CREATED, Json(token)))
}

/// Sign in with email and password
///
/// # Errors
///
/// - `400 Bad Request`: Missing or invalid email/password
/// - `403 Forbidden`: Unknown email or wrong password
pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<AuthRequest>,
) -> ApiResult<Json<AccessToken>> {
    let token = state.auth.signin(req.into()).await?;
    Ok(Json(token))
}
