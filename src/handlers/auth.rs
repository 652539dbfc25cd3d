use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        auth::{AuthenticatedUser, SESSION_COOKIE},
        rbac::RequireAdmin,
    },
    models::auth::{CreateUserPayload, LoginUserPayload, UserDto},
};

// Handler de login: confere as credenciais e emite o cookie de sessão
pub async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginUserPayload>,
) -> Result<(CookieJar, Json<UserDto>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let (user, token) = app_state
        .auth_service
        .login_user(&payload.username, &payload.password)
        .await?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build();

    Ok((jar.add(cookie), Json(user)))
}

// Handler da rota protegida /me
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<UserDto> {
    Json(UserDto { id: user.id, username: user.username, roles: user.roles })
}

// Encerra a sessão atual e descarta o cookie
pub async fn logout(
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> Result<CookieJar, AppError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        app_state.auth_service.logout(cookie.value()).await?;
    }

    // O cookie de remoção precisa do mesmo path do cookie emitido no login
    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");
    Ok(jar.remove(removal))
}

// Handler de registro, restrito a administradores
pub async fn register(
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
