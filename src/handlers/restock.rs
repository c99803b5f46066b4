use axum::{extract::State, Json};
use tracing::instrument;

use crate::database::{self, Pagination};
use crate::dtos::common::PageResponse;
use crate::error::AppError;
use crate::models::restock::ProductRestock;
use crate::state::AppState;

// Products whose total ordered quantity has reached their stock.
const LIST_RESTOCK: &str = r#"
    SELECT p.id AS product_id,
           (SUM(po.amount) - p.amount)::BIGINT AS amount,
           COUNT(*) OVER () AS total
    FROM product_order po
    JOIN product p ON p.id = po.product_id
    GROUP BY p.id
    HAVING SUM(po.amount) >= p.amount
    ORDER BY p.id ASC
    LIMIT $1 OFFSET $2"#;

const COUNT_RESTOCK: &str = r#"
    SELECT COUNT(*)
    FROM (
        SELECT p.id
        FROM product_order po
        JOIN product p ON p.id = po.product_id
        GROUP BY p.id
        HAVING SUM(po.amount) >= p.amount
    ) deficits"#;

// GET /v1/restock - Restock report, read only
#[instrument(skip(state))]
pub async fn get_restock(
    State(state): State<AppState>,
    page: Pagination,
) -> Result<Json<PageResponse<ProductRestock>>, AppError> {
    let (data, total) =
        database::fetch_page::<ProductRestock>(&state.db_pool, LIST_RESTOCK, COUNT_RESTOCK, page)
            .await
            .map_err(|e| AppError::db("Failed to fetch restock report", e))?;

    Ok(Json(PageResponse { total, data }))
}
