// src/dtos/order.rs
use serde::Serialize;

use super::product::ProductResponse;
use crate::models::customer::Customer;
use crate::models::order::Order;

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i32,
    pub customer: Customer,
    pub products: Vec<ProductResponse>,
    pub checkout: f64,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer: order.customer,
            products: order.products.into_iter().map(ProductResponse::from).collect(),
            checkout: order.checkout.to_display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::merchant::Merchant;
    use crate::models::money::Money;
    use crate::models::product::Product;
    use serde_json::json;

    #[test]
    fn order_view_shape() {
        let mut order = Order {
            id: 5,
            customer: Customer {
                id: 9,
                first_name: "Grace".into(),
                last_name: "Hopper".into(),
                email: None,
            },
            products: vec![
                Product {
                    id: 1,
                    order_id: Some(5),
                    merchant: Merchant { id: 1, name: "m1".into() },
                    name: "a".into(),
                    price: Money::from(500),
                    amount: 2,
                },
                Product {
                    id: 2,
                    order_id: Some(5),
                    merchant: Merchant { id: 1, name: "m1".into() },
                    name: "b".into(),
                    price: Money::from(300),
                    amount: 1,
                },
            ],
            checkout: Money::default(),
        };
        order.calc_checkout();

        let value = serde_json::to_value(OrderResponse::from(order)).unwrap();
        assert_eq!(
            value["customer"],
            json!({ "id": 9, "firstName": "Grace", "lastName": "Hopper", "email": null })
        );
        assert_eq!(value["checkout"], json!(13.0));
        assert_eq!(value["products"][0]["price"], json!(5.0));
        assert!(value["products"][0].get("orderId").is_none());
    }
}
