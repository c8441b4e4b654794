use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::{error, instrument, warn};
use uuid::Uuid;

use super::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use super::error::{DirectoryError, StoreError};
use crate::state::AppState;

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(list_users).post(create_user))
        .route(
            "/admin/users/:id",
            get(get_user).put(update_user).patch(update_user),
        )
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, (StatusCode, String)> {
    let users = state.users.list().await.map_err(reject)?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, (StatusCode, String)> {
    let user = state.users.get(id).await.map_err(reject)?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<UserResponse>), (StatusCode, String)>
{
    let input = payload.validate().map_err(reject)?;
    let user = state.users.create(input).await.map_err(reject)?;

    let location = format!("/api/v1/admin/users/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(user.into()),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, (StatusCode, String)> {
    let changes = payload.validate().map_err(reject)?;
    let user = state.users.update(id, changes).await.map_err(reject)?;
    Ok(Json(user.into()))
}

fn reject(e: DirectoryError) -> (StatusCode, String) {
    match e {
        DirectoryError::NotFound(id) => {
            warn!(user_id = %id, "user not found");
            (StatusCode::NOT_FOUND, "User not found".into())
        }
        DirectoryError::Validation(msg) => {
            warn!(reason = %msg, "invalid user request");
            (StatusCode::BAD_REQUEST, msg)
        }
        DirectoryError::Store(StoreError::Conflict(constraint)) => {
            warn!(%constraint, "user constraint violated");
            (StatusCode::CONFLICT, "Email already registered".into())
        }
        e => {
            error!(error = %e, "user directory failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".into(),
            )
        }
    }
}
