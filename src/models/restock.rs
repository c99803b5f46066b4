use serde::Serialize;
use sqlx::FromRow;

/// A product whose ordered quantity meets or exceeds its stock.
/// `amount` is the deficit: ordered minus in stock.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRestock {
    pub product_id: i32,
    pub amount: i64,
}
