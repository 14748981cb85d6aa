//! # Bookmarks Shared Library
//!
//! Domain types, persistence, and business logic for the bookmarks API.
//!
//! ## Module Organization
//!
//! - `models`: users and bookmarks
//! - `store`: repository traits with Postgres and in-memory backends
//! - `service`: auth, user profile, and owner-scoped bookmark services
//! - `auth`: password hashing, JWT, bearer-header authentication
//! - `db`: connection pool and migrations

pub mod auth;
pub mod db;
pub mod models;
pub mod service;
pub mod store;

/// Current version of the bookmarks shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
