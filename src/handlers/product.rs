// src/handlers/product.rs
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{instrument, warn};
use validator::Validate;

use crate::database::{self, Pagination};
use crate::dtos::common::{MessageResponse, PageResponse};
use crate::dtos::product::{ProductResponse, StockAmountRequest};
use crate::error::AppError;
use crate::extract::PathId;
use crate::models::product::Product;
use crate::state::AppState;

const LIST_PRODUCTS: &str = r#"
    SELECT p.id, p.name, p.price, p.amount,
           m.id AS merchant_id, m.name AS merchant_name,
           COUNT(*) OVER () AS total
    FROM product p
    JOIN merchant m ON m.id = p.merchant_id
    ORDER BY p.id ASC
    LIMIT $1 OFFSET $2"#;

const COUNT_PRODUCTS: &str = r#"
    SELECT COUNT(*)
    FROM product p
    JOIN merchant m ON m.id = p.merchant_id"#;

const GET_PRODUCT: &str = r#"
    SELECT p.id, p.name, p.price, p.amount,
           m.id AS merchant_id, m.name AS merchant_name
    FROM product p
    JOIN merchant m ON m.id = p.merchant_id
    WHERE p.id = $1"#;

const DELETE_PRODUCT: &str = "DELETE FROM product WHERE id = $1 RETURNING id";

const UPDATE_STOCK: &str = "UPDATE product SET amount = $1 WHERE id = $2 RETURNING id";

// GET /v1/products - Paginated product list
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
    page: Pagination,
) -> Result<Json<PageResponse<ProductResponse>>, AppError> {
    let (products, total) =
        database::fetch_page::<Product>(&state.db_pool, LIST_PRODUCTS, COUNT_PRODUCTS, page)
            .await
            .map_err(|e| AppError::db("Failed to fetch products", e))?;

    Ok(Json(PageResponse {
        total,
        data: products.into_iter().map(ProductResponse::from).collect(),
    }))
}

// GET /v1/products/{id} - Single product
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<ProductResponse>, AppError> {
    let product = database::fetch_one_by_id::<Product>(&state.db_pool, GET_PRODUCT, id)
        .await
        .map_err(|e| AppError::db("Failed to fetch product", e))?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(ProductResponse::from(product)))
}

// DELETE /v1/products/{id} - Delete product, line items are left alone
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<MessageResponse>, AppError> {
    let (deleted_id,) = database::fetch_one_by_id::<(i32,)>(&state.db_pool, DELETE_PRODUCT, id)
        .await
        .map_err(|e| AppError::db("Failed to delete product", e))?
        .ok_or_else(|| AppError::validation("No product to delete"))?;

    Ok(Json(MessageResponse::new(format!("Deleted record with id: {deleted_id}"))))
}

// PATCH /v1/products/{id} - Overwrite stock amount
#[instrument(skip(state, payload))]
pub async fn update_stock(
    State(state): State<AppState>,
    PathId(id): PathId,
    payload: Result<Json<StockAmountRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "Rejected stock update body");
        AppError::validation("Failed to parse request body")
    })?;

    let amount = payload
        .validate()
        .ok()
        .and(payload.amount)
        .ok_or_else(|| AppError::validation("Amount is required and must not be negative"))?;

    let updated_id = sqlx::query_scalar::<_, i32>(UPDATE_STOCK)
        .bind(amount)
        .bind(id)
        .fetch_optional(&state.db_pool)
        .await
        .map_err(|e| AppError::db("Failed to update product stock", e))?
        .ok_or_else(|| AppError::validation("No product to update"))?;

    Ok(Json(MessageResponse::new(format!(
        "Updated stock amount for product with id: {updated_id}"
    ))))
}
