/// JWT authentication layer
///
/// Validates the bearer token and inserts an [`AuthContext`] into request
/// extensions. Handlers behind this layer take `Extension<AuthContext>` and
/// hand `auth.user_id` to the services.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use bookmarks_shared::auth::middleware::{authenticate, AuthContext};

use crate::{app::AppState, error::ApiError};

/// Rejects the request with 401 unless it carries a valid access token
pub async fn jwt_auth_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_context: AuthContext = authenticate(req.headers(), state.jwt_secret())?;

    tracing::debug!(user_id = %auth_context.user_id, "Request authenticated");
    req.extensions_mut().insert(auth_context);

    Ok(next.run(req).await)
}
