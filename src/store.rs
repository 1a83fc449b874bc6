//! SQLite-backed store for all record kinds. One pool, constructed at startup and shared
//! through `AppState`.

use crate::config::Settings;
use crate::error::StoreError;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::FromRow;
use std::str::FromStr;

/// One non-id column of a record table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    /// Type and constraints as written in `CREATE TABLE` / `ALTER TABLE ADD COLUMN`.
    pub definition: &'static str,
}

impl Column {
    pub const fn new(name: &'static str, definition: &'static str) -> Self {
        Self { name, definition }
    }
}

/// A record kind persisted in its own table with an integer `id` primary key.
pub trait Record: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static {
    /// Human-readable kind, used in logs.
    const KIND: &'static str;
    const TABLE: &'static str;
    /// Columns other than `id`, in the order `bind_columns` binds them.
    const COLUMNS: &'static [Column];

    fn set_id(&mut self, id: i64);
    fn bind_columns<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>>;
}

#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (creating if missing) the database named by `settings.database_url`.
    pub async fn connect(settings: &Settings) -> Result<Self, StoreError> {
        let opts = SqliteConnectOptions::from_str(&settings.database_url)?.create_if_missing(true);
        let mut pool_opts = SqlitePoolOptions::new().max_connections(settings.max_connections.max(1));
        if is_memory_url(&settings.database_url) {
            // Every in-memory connection is a separate database: pin exactly one, forever.
            pool_opts = pool_opts
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }
        let pool = pool_opts.connect_with(opts).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Cheap round-trip used by the readiness probe.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Insert all columns of `record` as given; the store assigns the id.
    pub async fn create<T: Record>(&self, mut record: T) -> Result<T, StoreError> {
        let sql = insert_sql::<T>();
        tracing::debug!(sql = %sql, kind = T::KIND, "insert");
        let result = record.bind_columns(sqlx::query(&sql)).execute(&self.pool).await?;
        record.set_id(result.last_insert_rowid());
        Ok(record)
    }

    /// Every row of `T`, in insertion order.
    pub async fn find_all<T: Record>(&self) -> Result<Vec<T>, StoreError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", select_list::<T>(), T::TABLE);
        tracing::debug!(sql = %sql, kind = T::KIND, "select all");
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    pub async fn find_by_id<T: Record>(&self, id: i64) -> Result<T, StoreError> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?", select_list::<T>(), T::TABLE);
        tracing::debug!(sql = %sql, kind = T::KIND, id, "select by id");
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Rows of `T` whose `column` equals `foreign_id`; empty when nothing matches.
    /// `column` must be one of `T::COLUMNS`.
    pub async fn find_by_foreign_key<T: Record>(
        &self,
        column: &'static str,
        foreign_id: i64,
    ) -> Result<Vec<T>, StoreError> {
        debug_assert!(T::COLUMNS.iter().any(|c| c.name == column));
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ? ORDER BY id",
            select_list::<T>(),
            T::TABLE,
            column
        );
        tracing::debug!(sql = %sql, kind = T::KIND, foreign_id, "select by foreign key");
        let rows = sqlx::query_as::<_, T>(&sql)
            .bind(foreign_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Delete the row with `id`. Absent rows are not an error; returns the number of rows removed.
    pub async fn delete_by_id<T: Record>(&self, id: i64) -> Result<u64, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        tracing::debug!(sql = %sql, kind = T::KIND, id, "delete");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn select_list<T: Record>() -> String {
    std::iter::once("id")
        .chain(T::COLUMNS.iter().map(|c| c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn insert_sql<T: Record>() -> String {
    let names: Vec<&str> = T::COLUMNS.iter().map(|c| c.name).collect();
    let placeholders = vec!["?"; names.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        T::TABLE,
        names.join(", "),
        placeholders
    )
}
