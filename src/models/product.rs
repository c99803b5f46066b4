// src/models/product.rs
use sqlx::{postgres::PgRow, FromRow, Row};

use super::merchant::Merchant;
use super::money::Money;

/// A product joined with its merchant.
///
/// When read through an order, `amount` is the ordered quantity of the line
/// item and `order_id` names the order it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub order_id: Option<i32>,
    pub merchant: Merchant,
    pub name: String,
    pub price: Money,
    pub amount: i32,
}

impl Product {
    pub fn line_total(&self) -> Money {
        self.price * self.amount
    }
}

// Expects `id, name, price, amount, merchant_id, merchant_name` and an
// optional `order_id`.
impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let order_id = match row.try_get::<i32, _>("order_id") {
            Ok(id) => Some(id),
            Err(sqlx::Error::ColumnNotFound(_)) => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            id: row.try_get("id")?,
            order_id,
            merchant: Merchant {
                id: row.try_get("merchant_id")?,
                name: row.try_get("merchant_name")?,
            },
            name: row.try_get("name")?,
            price: Money::from(row.try_get::<i32, _>("price")?),
            amount: row.try_get("amount")?,
        })
    }
}
