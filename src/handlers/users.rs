//! `/api/users` handlers.

use super::{delete_and_echo, parse_id};
use crate::error::{AppError, StoreError};
use crate::extractors::LenientJson;
use crate::models::User;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = User,
    responses((status = 200, description = "Created user with its assigned id", body = User))
)]
pub async fn create_user(
    State(state): State<AppState>,
    LenientJson(user): LenientJson<User>,
) -> Result<Json<User>, AppError> {
    let user = state.store.create(User { id: 0, ..user }).await?;
    tracing::info!(id = user.id, "user created");
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses((status = 200, description = "All users", body = Vec<User>))
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.store.find_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No such user")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let id = parse_id(&id).ok_or(StoreError::NotFound)?;
    Ok(Json(state.store.find_by_id(id).await?))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses((status = 200, description = "Deleted, or nothing matched; echoes an empty user", body = User))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    delete_and_echo(&state, &id).await
}
