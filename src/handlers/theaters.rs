use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, rbac::RequireAdmin},
    models::theater::{TheaterDto, TheaterPayload},
};

// Listagem pública de cinemas
pub async fn list_theaters(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<TheaterDto>>, AppError> {
    let theaters = app_state.theater_service.list().await?;
    Ok(Json(theaters))
}

pub async fn get_theater(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TheaterDto>, AppError> {
    let theater = app_state.theater_service.get(id).await?;
    Ok(Json(theater))
}

// Criação é exclusiva de administradores
pub async fn create_theater(
    RequireAdmin(_admin): RequireAdmin,
    State(app_state): State<AppState>,
    Json(payload): Json<TheaterPayload>,
) -> Result<(StatusCode, Json<TheaterDto>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let theater = app_state.theater_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(theater)))
}

// Atualização: Admin ou o gerente atribuído ao cinema.
// A validação do payload vem antes de qualquer acesso ao banco.
pub async fn update_theater(
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TheaterPayload>,
) -> Result<Json<TheaterDto>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let theater = app_state.theater_service.update(&user, id, &payload).await?;
    Ok(Json(theater))
}

// Remoção é exclusiva de administradores; responde o id removido
pub async fn delete_theater(
    RequireAdmin(_admin): RequireAdmin,
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = app_state.theater_service.delete(id).await?;
    Ok(Json(json!({ "id": id })))
}
