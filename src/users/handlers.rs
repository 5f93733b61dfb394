use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::{
    CreateUserRequest, MessageResponse, UpdateUserRequest, UserCreatedResponse,
    UserUpdatedResponse,
};
use crate::users::repo::User;
use crate::users::services;

// Payloads are skipped from spans so plaintext passwords never hit the logs.

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserCreatedResponse>), ApiError> {
    let user = services::create_user(state.store.as_ref(), payload).await?;
    info!(user_id = %user.id, email = %user.email, "user created");
    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            user,
            message: "User created successfully".into(),
        }),
    ))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, ApiError> {
    let user = services::get_user_by_id(state.store.as_ref(), id).await?;
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = services::get_all_users(state.store.as_ref()).await?;
    Ok(Json(users))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserUpdatedResponse>, ApiError> {
    let updated_user = services::update_user(state.store.as_ref(), id, payload).await?;
    info!(user_id = %updated_user.id, "user updated");
    Ok(Json(UserUpdatedResponse {
        updated_user,
        message: "User updated successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let confirmation = services::delete_user(state.store.as_ref(), id).await?;
    info!(user_id = %id, "user deleted");
    Ok(Json(confirmation))
}
