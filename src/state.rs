// src/state.rs
use sqlx::PgPool;

/// Shared per-process handles. Cloning is cheap; the pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}
