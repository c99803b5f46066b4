use axum::{routing::get, Router};
use crate::handlers::product::{delete_product, get_product, get_products, update_stock};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(get_products))
        .route(
            "/products/{id}",
            get(get_product).delete(delete_product).patch(update_stock),
        )
}
