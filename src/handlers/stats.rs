use axum::{extract::State, Json};
use tracing::instrument;

use crate::error::AppError;
use crate::models::stats::Stats;
use crate::state::AppState;

const TABLE_STATS: &str = r#"
    SELECT (SELECT MAX(id) FROM customer)       AS max_customer,
           (SELECT MAX(id) FROM merchant)       AS max_merchant,
           (SELECT MAX(id) FROM customer_order) AS max_co,
           (SELECT MAX(id) FROM product)        AS max_product"#;

// GET /v1/stats
#[instrument(skip(state))]
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<Stats>, AppError> {
    let stats = sqlx::query_as::<_, Stats>(TABLE_STATS)
        .fetch_one(&state.db_pool)
        .await
        .map_err(|e| AppError::db("Failed to fetch stats", e))?;

    Ok(Json(stats))
}
