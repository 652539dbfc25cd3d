use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, rbac::RequireAdmin},
    models::auth::{CreateUserPayload, UserDto},
};

// Criação de usuários com seus cargos, restrita a administradores
pub async fn create_user(
    RequireAdmin(_admin): RequireAdmin,
    State(app_state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<Json<UserDto>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let user = app_state
        .user_service
        .create_user_with_roles(&payload.username, &payload.password, &payload.roles)
        .await?;

    Ok(Json(user))
}

pub async fn get_user(
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserDto>, AppError> {
    let user = app_state.user_service.get_user(id).await?;
    Ok(Json(user))
}
