/// Authentication primitives
///
/// - [`password`]: Argon2id hashing and verification
/// - [`jwt`]: HS256 access token creation and validation
/// - [`middleware`]: bearer-header parsing into an [`middleware::AuthContext`]

pub mod jwt;
pub mod middleware;
pub mod password;
