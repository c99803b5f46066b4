//! REST service over products, merchants, customers and orders.
pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The full application: `/v1/...` plus `/ping`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/v1", routes::create_router())
        .route("/ping", get(handlers::health::ping))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
