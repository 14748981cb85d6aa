/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Signup and signin
/// - `users`: The caller's profile
/// - `bookmarks`: The caller's bookmarks

pub mod auth;
pub mod bookmarks;
pub mod health;
pub mod users;
