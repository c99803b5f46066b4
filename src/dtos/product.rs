// src/dtos/product.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::merchant::Merchant;
use crate::models::product::Product;

#[derive(Debug, Deserialize, Validate)]
pub struct StockAmountRequest {
    #[validate(required, range(min = 0))]
    pub amount: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub merchant: Merchant,
    pub name: String,
    pub price: f64,
    pub amount: i32,
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            merchant: product.merchant,
            name: product.name,
            price: product.price.to_display(),
            amount: product.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::money::Money;
    use serde_json::json;

    #[test]
    fn product_view_shape() {
        let product = Product {
            id: 3,
            order_id: Some(8),
            merchant: Merchant { id: 2, name: "acme".into() },
            name: "kettle".into(),
            price: Money::from(1999),
            amount: 4,
        };

        let value = serde_json::to_value(ProductResponse::from(product)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "merchant": { "id": 2, "name": "acme" },
                "name": "kettle",
                "price": 19.99,
                "amount": 4
            })
        );
    }

    #[test]
    fn stock_amount_must_be_present_and_non_negative() {
        let parse = |body: &str| serde_json::from_str::<StockAmountRequest>(body).unwrap();

        assert!(parse(r#"{"amount": 0}"#).validate().is_ok());
        assert!(parse(r#"{"amount": 120}"#).validate().is_ok());
        assert!(parse(r#"{"amount": -1}"#).validate().is_err());
        assert!(parse(r#"{"amount": null}"#).validate().is_err());
        assert!(parse(r#"{}"#).validate().is_err());
    }
}
