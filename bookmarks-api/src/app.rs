/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use bookmarks_api::{app::AppState, config::Config};
/// use bookmarks_shared::store::memory::MemoryStore;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let state = AppState::new(MemoryStore::new(), config);
/// let app = bookmarks_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{
    config::Config,
    middleware::{auth::jwt_auth_layer, security::SecurityHeadersLayer},
    routes,
};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, patch, post},
    Router,
};
use bookmarks_shared::{
    service::{auth::AuthService, bookmark::BookmarkService, user::UserService},
    store::Store,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned into every handler via Axum's `State` extractor; all fields are
/// Arc-backed.
#[derive(Clone)]
pub struct AppState {
    /// Backing store, used directly only for health checks
    pub store: Arc<dyn Store>,

    /// Signup/signin
    pub auth: AuthService,

    /// Profile read/edit
    pub users: UserService,

    /// Owner-scoped bookmark operations
    pub bookmarks: BookmarkService,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires every service to `store`
    pub fn new<S: Store + 'static>(store: S, config: Config) -> Self {
        let store = Arc::new(store);

        Self {
            auth: AuthService::new(store.clone(), config.jwt.secret.as_str(), config.token_ttl()),
            users: UserService::new(store.clone()),
            bookmarks: BookmarkService::new(store.clone()),
            store,
            config: Arc::new(config),
        }
    }

    /// Gets JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET    /health            # Health check (public)
/// ├── /auth/                    # Public
/// │   ├── POST /signup
/// │   └── POST /signin
/// ├── /users/                   # Authenticated
/// │   ├── GET   /me
/// │   └── PATCH /
/// └── /bookmarks/               # Authenticated
///     ├── GET    /
///     ├── POST   /
///     ├── GET    /:id
///     ├── PATCH  /:id
///     └── DELETE /:id
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Security headers
/// 2. CORS (tower-http CorsLayer)
/// 3. Logging (tower-http TraceLayer)
/// 4. Authentication (per-route basis)
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let auth_routes = Router::new()
        .route("/signup", post(routes::auth::signup))
        .route("/signin", post(routes::auth::signin));

    let user_routes = Router::new()
        .route("/me", get(routes::users::get_me))
        .route("/", patch(routes::users::edit_user))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_layer,
        ));

    let bookmark_routes = Router::new()
        .route(
            "/",
            get(routes::bookmarks::list_bookmarks).post(routes::bookmarks::create_bookmark),
        )
        .route(
            "/:id",
            get(routes::bookmarks::get_bookmark)
                .patch(routes::bookmarks::edit_bookmark)
                .delete(routes::bookmarks::delete_bookmark),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_layer,
        ));

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(health_routes)
        .nest("/auth", auth_routes)
        .nest("/users", user_routes)
        .nest("/bookmarks", bookmark_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .with_state(state)
}
