/// Middleware for the API server
///
/// - `security`: hardening response headers
/// - `auth`: bearer-token authentication for protected routes

pub mod auth;
pub mod security;
