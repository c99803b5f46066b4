// src/models/order.rs
use std::collections::HashMap;

use sqlx::{postgres::PgRow, FromRow, Row};

use super::customer::Customer;
use super::money::Money;
use super::product::Product;

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub customer: Customer,
    pub products: Vec<Product>,
    pub checkout: Money,
}

impl Order {
    /// Recomputes `checkout` from the attached line items.
    pub fn calc_checkout(&mut self) {
        self.checkout = self.products.iter().map(Product::line_total).sum();
    }
}

// Expects `id, customer_id, first_name, last_name, email`.
impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            customer: Customer {
                id: row.try_get("customer_id")?,
                first_name: row.try_get("first_name")?,
                last_name: row.try_get("last_name")?,
                email: row.try_get("email")?,
            },
            products: Vec::new(),
            checkout: Money::default(),
        })
    }
}

/// Groups line items by their order id, hands each order its own items and
/// recomputes its checkout. Items for orders outside the batch are dropped.
pub fn attach_line_items(orders: &mut [Order], line_items: Vec<Product>) {
    let mut by_order: HashMap<i32, Vec<Product>> = HashMap::with_capacity(orders.len());
    for item in line_items {
        if let Some(order_id) = item.order_id {
            by_order.entry(order_id).or_default().push(item);
        }
    }

    for order in orders.iter_mut() {
        order.products = by_order.remove(&order.id).unwrap_or_default();
        order.calc_checkout();
    }
}
