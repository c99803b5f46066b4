// src/database.rs
use sqlx::{
    postgres::{PgPoolOptions, PgRow},
    FromRow, PgPool, Row,
};

use crate::config::Config;

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_OFFSET: i64 = 0;

/// Builds the process-wide pool. Connections are opened on first use, so the
/// service starts (and `/ping` answers) even while the database is down.
pub fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;
    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(options))
}

/// `LIMIT`/`OFFSET` pair for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { limit: DEFAULT_LIMIT, offset: DEFAULT_OFFSET }
    }
}

impl Pagination {
    /// Lenient parsing: anything missing, non-numeric or out of range falls
    /// back to the default instead of failing the request.
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_LIMIT);
        let offset = offset
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|o| *o >= 0)
            .unwrap_or(DEFAULT_OFFSET);
        Self { limit, offset }
    }
}

/// A row plus the `COUNT(*) OVER ()` column named `total`.
#[derive(Debug)]
pub struct Counted<T> {
    pub total: i64,
    pub item: T,
}

impl<'r, T> FromRow<'r, PgRow> for Counted<T>
where
    T: FromRow<'r, PgRow>,
{
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            total: row.try_get("total")?,
            item: T::from_row(row)?,
        })
    }
}

/// Runs `list_sql` with `$1 = limit, $2 = offset` and returns the page with
/// the total number of matching rows.
///
/// The total comes from the window count on the first row. A page past the
/// end has no rows to carry it, so `count_sql` is asked instead.
pub async fn fetch_page<T>(
    pool: &PgPool,
    list_sql: &str,
    count_sql: &str,
    page: Pagination,
) -> Result<(Vec<T>, i64), sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let rows = sqlx::query_as::<_, Counted<T>>(list_sql)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(pool)
        .await?;

    let total = match rows.first() {
        Some(row) => row.total,
        None if page.offset > 0 => {
            sqlx::query_scalar::<_, i64>(count_sql)
                .fetch_one(pool)
                .await?
        }
        None => 0,
    };

    Ok((rows.into_iter().map(|row| row.item).collect(), total))
}

/// Runs `sql` with the id batch bound as an array to `$1` (`= ANY($1)`).
/// An empty batch is still sent and simply matches nothing.
pub async fn fetch_filtered<T>(pool: &PgPool, sql: &str, ids: &[i32]) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    sqlx::query_as::<_, T>(sql).bind(ids).fetch_all(pool).await
}

/// Runs `sql` with `$1 = id`; `None` when no row comes back.
pub async fn fetch_one_by_id<T>(pool: &PgPool, sql: &str, id: i32) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    sqlx::query_as::<_, T>(sql).bind(id).fetch_optional(pool).await
}
