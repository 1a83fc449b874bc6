//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
    #[error("invalid bind address: {0}")]
    BindAddress(String),
}

/// Store failures. A missing row and a failing store are distinct outcomes.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Store(StoreError::Unavailable(e))
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Absent rows answer with a bare 404 and no body.
            AppError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND.into_response(),
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED.into_response(),
            AppError::Store(StoreError::Unavailable(ref e)) => {
                tracing::error!(error = %e, "store unavailable");
                let body = ErrorBody {
                    error: ErrorDetail {
                        code: "store_unavailable".to_string(),
                        message: self.to_string(),
                    },
                };
                (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
            }
        }
    }
}
