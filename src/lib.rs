//! Quiz backend: users, genres, quizzes, questions and scores over a JSON HTTP API,
//! persisted in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError, StoreError};
pub use migration::apply_migrations;
pub use models::{Genre, Question, Quiz, Score, User};
pub use routes::{api_routes, app, common_routes, docs_routes, ApiDoc};
pub use state::AppState;
pub use store::{Record, Store};
