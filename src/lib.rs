//! ExoHabit Backend
//!
//! Serves a habitability classifier and a dataset dashboard over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        EXOHABIT API                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  POST /predict                                               │
//! │    coerce ─▶ engineer ─▶ assemble ─▶ scale ─▶ classify       │
//! │                                     (or fallback rule)       │
//! │  GET /dashboard-data                                         │
//! │    dataset ─▶ aggregate                                      │
//! │                                                              │
//! │  ServiceContext: model + scaler + dataset, loaded once       │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod models;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use context::ServiceContext;
pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<ServiceContext>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(context: ServiceContext, config: config::Config) -> Self {
        Self {
            context: Arc::new(context),
            config,
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::home))
        .route("/health", get(handlers::health::check))
        .route("/dashboard-data", get(handlers::dashboard::get_dashboard))
        .route("/predict", post(handlers::predict::predict))
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
