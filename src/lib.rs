//! Run Dome Sign-Up Server Library
//!
//! Race sign-ups and team registrations collected through a small web form
//! and kept in flat CSV files.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod pages;
pub mod routes;
pub mod session;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
pub use session::SessionRegistry;
pub use store::DatasetStore;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DatasetStore>,
    pub sessions: SessionRegistry,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with an empty session registry
    pub fn new(store: DatasetStore, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            sessions: SessionRegistry::with_capacity(config.max_sessions),
            config,
        }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    use routes::*;

    let mut router = Router::new()
        .route("/", get(show_page))
        .route("/navigate", post(navigate_to))
        .route("/signup", post(submit_signup))
        .route("/teams", post(register_team))
        .route("/teams/home", post(back_home))
        .route("/api/stats", get(signup_stats))
        .route("/health", get(health_check));

    if state.config.log_requests {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}
