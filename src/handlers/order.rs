// src/handlers/order.rs
use axum::{extract::State, Json};
use tracing::{debug, instrument};

use crate::database::{self, Pagination};
use crate::dtos::common::{MessageResponse, PageResponse};
use crate::dtos::order::OrderResponse;
use crate::error::AppError;
use crate::extract::PathId;
use crate::models::order::{attach_line_items, Order};
use crate::models::product::Product;
use crate::state::AppState;

const LIST_ORDERS: &str = r#"
    SELECT co.id,
           c.id AS customer_id, c.first_name, c.last_name, c.email,
           COUNT(*) OVER () AS total
    FROM customer_order co
    JOIN customer c ON c.id = co.customer_id
    ORDER BY co.id ASC
    LIMIT $1 OFFSET $2"#;

const COUNT_ORDERS: &str = r#"
    SELECT COUNT(*)
    FROM customer_order co
    JOIN customer c ON c.id = co.customer_id"#;

// `amount` here is the ordered quantity, not the stock level.
const LINE_ITEMS_FOR_ORDERS: &str = r#"
    SELECT p.id, po.order_id, p.name, po.amount, p.price,
           m.id AS merchant_id, m.name AS merchant_name
    FROM product_order po
    JOIN product p ON p.id = po.product_id
    JOIN merchant m ON m.id = p.merchant_id
    WHERE po.order_id = ANY($1)
    ORDER BY po.order_id ASC, p.id ASC"#;

const DELETE_ORDER: &str = "DELETE FROM customer_order WHERE id = $1 RETURNING id";

// GET /v1/orders - Paginated orders with their line items and checkout
#[instrument(skip(state))]
pub async fn get_orders(
    State(state): State<AppState>,
    page: Pagination,
) -> Result<Json<PageResponse<OrderResponse>>, AppError> {
    let (mut orders, total) =
        database::fetch_page::<Order>(&state.db_pool, LIST_ORDERS, COUNT_ORDERS, page)
            .await
            .map_err(|e| AppError::db("Failed to fetch orders", e))?;

    // Not in a transaction with the page read above.
    let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
    let line_items =
        database::fetch_filtered::<Product>(&state.db_pool, LINE_ITEMS_FOR_ORDERS, &order_ids)
            .await
            .map_err(|e| AppError::db("Failed to fetch order line items", e))?;
    debug!(orders = orders.len(), line_items = line_items.len(), "Loaded order page");

    attach_line_items(&mut orders, line_items);

    Ok(Json(PageResponse {
        total,
        data: orders.into_iter().map(OrderResponse::from).collect(),
    }))
}

// DELETE /v1/orders/{id} - Delete order, no cascade to line items
#[instrument(skip(state))]
pub async fn delete_order(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<MessageResponse>, AppError> {
    let (deleted_id,) = database::fetch_one_by_id::<(i32,)>(&state.db_pool, DELETE_ORDER, id)
        .await
        .map_err(|e| AppError::db("Failed to delete order", e))?
        .ok_or_else(|| AppError::validation("No order to delete"))?;

    Ok(Json(MessageResponse::new(format!("Deleted record with id: {deleted_id}"))))
}
