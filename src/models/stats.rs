use serde::Serialize;
use sqlx::FromRow;

/// Highest id per table; `None` while a table is empty.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub max_customer: Option<i32>,
    pub max_merchant: Option<i32>,
    pub max_co: Option<i32>,
    pub max_product: Option<i32>,
}
