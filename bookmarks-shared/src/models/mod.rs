/// Data models
///
/// - `user`: user accounts
/// - `bookmark`: saved links, each owned by one user
///
/// Models are plain data; reading and writing them goes through the
/// repositories in [`crate::store`].

pub mod bookmark;
pub mod user;
