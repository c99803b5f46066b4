pub mod health;
pub mod order;
pub mod product;
pub mod restock;
pub mod stats;
