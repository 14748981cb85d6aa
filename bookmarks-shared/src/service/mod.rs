/// Business logic
///
/// Each service is constructed with explicit repository handles and takes the
/// caller's identity as a parameter on every operation.
///
/// - `auth`: signup and signin
/// - `user`: profile retrieval and editing
/// - `bookmark`: owner-scoped bookmark CRUD

pub mod auth;
pub mod bookmark;
pub mod user;
