pub mod customer;
pub mod merchant;
pub mod money;
pub mod order;
pub mod product;
pub mod restock;
pub mod stats;
