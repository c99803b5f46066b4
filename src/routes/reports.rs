use axum::{routing::get, Router};
use crate::handlers::{restock::get_restock, stats::get_stats};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/restock", get(get_restock))
        .route("/stats", get(get_stats))
}
