//! # Bookmarks API Server Library
//!
//! HTTP surface for the bookmarks service: signup/signin, the caller's
//! profile, and owner-scoped bookmark CRUD.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `extract`: Request extractors with JSON error rejections
//! - `middleware`: Authentication and security headers
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
