/// Request authentication
///
/// Turns an `Authorization: Bearer <token>` header into an [`AuthContext`].
/// The API's auth layer calls [`authenticate`] and stores the context in
/// request extensions; handlers then pass `auth.user_id` explicitly into
/// services.
///
/// # Example
///
/// ```
/// use axum::http::{header, HeaderMap, HeaderValue};
/// use bookmarks_shared::auth::jwt::{create_token, Claims};
/// use bookmarks_shared::auth::middleware::authenticate;
/// use chrono::Duration;
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let secret = "your-secret-key-at-least-32-bytes";
/// let user_id = Uuid::new_v4();
/// let token = create_token(&Claims::new(user_id, "a@b.co", Duration::minutes(5)), secret)?;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(header::AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token))?);
///
/// let auth = authenticate(&headers, secret)?;
/// assert_eq!(auth.user_id, user_id);
/// # Ok(())
/// # }
/// ```

use axum::http::{header, HeaderMap};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::jwt::{validate_token, Claims, JwtError};

/// Authenticated caller
///
/// Handlers extract it with `Extension<AuthContext>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// Caller's user ID
    pub user_id: Uuid,

    /// Email the token was issued for
    pub email: String,
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
        }
    }
}

/// Error type for request authentication
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No Authorization header
    #[error("Missing credentials")]
    MissingCredentials,

    /// Header present but not `Bearer <token>`
    #[error("Invalid authorization header: {0}")]
    InvalidFormat(String),

    /// Token failed validation
    #[error(transparent)]
    InvalidToken(#[from] JwtError),
}

/// Validates the bearer token in `headers`
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<AuthContext, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|_| AuthError::InvalidFormat("Header is not valid ASCII".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::InvalidFormat("Expected Bearer token".to_string()))?;

    let claims = validate_token(token, secret)?;

    Ok(AuthContext::from(claims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::create_token;
    use axum::http::HeaderValue;
    use chrono::Duration;

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_authenticate_valid_token() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "vlad@gmail.com", Duration::minutes(15));
        let token = create_token(&claims, SECRET).unwrap();

        let auth = authenticate(&headers_with(&format!("Bearer {}", token)), SECRET).unwrap();

        assert_eq!(auth.user_id, user_id);
        assert_eq!(auth.email, "vlad@gmail.com");
    }

    #[test]
    fn test_authenticate_missing_header() {
        let result = authenticate(&HeaderMap::new(), SECRET);
        assert!(matches!(result, Err(AuthError::MissingCredentials)));
    }

    #[test]
    fn test_authenticate_wrong_scheme() {
        let result = authenticate(&headers_with("Basic dXNlcjpwYXNz"), SECRET);
        assert!(matches!(result, Err(AuthError::InvalidFormat(_))));

        let result = authenticate(&headers_with("Bearer "), SECRET);
        assert!(matches!(result, Err(AuthError::InvalidFormat(_))));
    }

    #[test]
    fn test_authenticate_expired_token() {
        let claims = Claims::new(Uuid::new_v4(), "a@b.co", Duration::seconds(-60));
        let token = create_token(&claims, SECRET).unwrap();

        let result = authenticate(&headers_with(&format!("Bearer {}", token)), SECRET);
        assert!(matches!(result, Err(AuthError::InvalidToken(JwtError::Expired))));
    }
}
