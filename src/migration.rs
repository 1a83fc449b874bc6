//! Create and auto-migrate the record tables at startup.
//! Tables are created if absent; columns missing from an existing table are added.
//! Nothing is ever dropped or retyped.

use crate::error::StoreError;
use crate::models::{Genre, Question, Quiz, Score, User};
use crate::store::{Column, Record, Store};
use std::collections::HashSet;

/// Table name and non-id columns for every record kind, in creation order.
const TABLES: &[(&str, &[Column])] = &[
    (User::TABLE, User::COLUMNS),
    (Genre::TABLE, Genre::COLUMNS),
    (Quiz::TABLE, Quiz::COLUMNS),
    (Question::TABLE, Question::COLUMNS),
    (Score::TABLE, Score::COLUMNS),
];

/// Idempotent: safe to run on every start.
pub async fn apply_migrations(store: &Store) -> Result<(), StoreError> {
    let pool = store.pool();
    for (table, columns) in TABLES {
        sqlx::query(&create_table_sql(table, columns))
            .execute(pool)
            .await?;

        let existing: HashSet<String> = sqlx::query_as::<_, (String,)>(&format!(
            "SELECT name FROM pragma_table_info('{}')",
            table
        ))
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|(name,)| name)
        .collect();

        for col in columns.iter().filter(|c| !existing.contains(c.name)) {
            tracing::info!(table = %table, column = %col.name, "adding missing column");
            sqlx::query(&format!(
                "ALTER TABLE {} ADD COLUMN {} {}",
                table, col.name, col.definition
            ))
            .execute(pool)
            .await?;
        }
    }
    tracing::info!(tables = TABLES.len(), "schema up to date");
    Ok(())
}

fn create_table_sql(table: &str, columns: &[Column]) -> String {
    let mut defs = vec!["id INTEGER PRIMARY KEY AUTOINCREMENT".to_string()];
    defs.extend(columns.iter().map(|c| format!("{} {}", c.name, c.definition)));
    format!("CREATE TABLE IF NOT EXISTS {} ({})", table, defs.join(", "))
}
