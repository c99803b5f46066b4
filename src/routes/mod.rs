pub mod orders;
pub mod products;
pub mod reports;

use axum::Router;
use crate::error::AppError;
use crate::state::AppState;

/// Everything served under `/v1`.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(orders::routes())
        .merge(reports::routes())
        .fallback(invalid_path)
}

// Unknown shapes under `/v1`, e.g. `/products/1/extra` or `/products/`.
async fn invalid_path() -> AppError {
    AppError::validation("Invalid path")
}
