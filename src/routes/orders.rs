use axum::{
    routing::{delete, get},
    Router,
};
use crate::handlers::order::{delete_order, get_orders};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(get_orders))
        .route("/orders/{id}", delete(delete_order))
}
