//! JSON body extractor that never rejects a body it cannot decode.
//!
//! A body that is empty, not JSON, or the wrong shape yields `T::default()` (logged at warn),
//! and the request proceeds with the zero-valued record. The Content-Type header is not checked.
//! Top-level object keys match case-insensitively and ignore `_`: `genreId`, `GenreID` and
//! `genre_id` all name the same field. Records list their lowercase spellings as aliases.
//! Only failing to read the body at all (e.g. over the size limit) rejects the request.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default)]
pub struct LenientJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let decoded = serde_json::from_slice::<Value>(&bytes)
            .and_then(|value| serde_json::from_value::<T>(fold_keys(value)));
        match decoded {
            Ok(value) => Ok(LenientJson(value)),
            Err(e) => {
                tracing::warn!(error = %e, len = bytes.len(), "undecodable body, using zero-valued record");
                Ok(LenientJson(T::default()))
            }
        }
    }
}

/// Lowercase and strip `_` from the keys of a top-level object.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase().replace('_', ""), v))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}
