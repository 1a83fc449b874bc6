//! HTTP handlers, one module per record kind.

pub mod genres;
pub mod questions;
pub mod quizzes;
pub mod scores;
pub mod users;

use crate::error::AppError;
use crate::state::AppState;
use crate::store::Record;
use axum::Json;
use serde::Serialize;

/// Path ids that are not integers match no row.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Delete by id and answer with the zero-valued record. Unknown ids are a successful no-op.
pub(crate) async fn delete_and_echo<T>(state: &AppState, raw_id: &str) -> Result<Json<T>, AppError>
where
    T: Record + Default + Serialize,
{
    match parse_id(raw_id) {
        Some(id) => {
            let removed = state.store.delete_by_id::<T>(id).await?;
            tracing::info!(kind = T::KIND, id, removed, "delete");
        }
        None => tracing::info!(kind = T::KIND, id = %raw_id, "delete of non-numeric id ignored"),
    }
    Ok(Json(T::default()))
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn parses_numeric_ids_only() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
    }
}
