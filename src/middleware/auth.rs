// src/middleware/auth.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{common::error::AppError, config::AppState, models::auth::CurrentUser};

// Nome do cookie de sessão emitido no login
pub const SESSION_COOKIE: &str = "session";

// Extrator-guardião: valida o cookie de sessão e carrega o usuário atual.
// Colocado como argumento, transforma qualquer handler em rota protegida.
pub struct AuthenticatedUser(pub CurrentUser);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Reaproveita o usuário se outro extrator já o validou nesta requisição
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(AuthenticatedUser(user.clone()));
        }

        let app_state = AppState::from_ref(state);

        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_owned())
            .ok_or(AppError::InvalidSession)?;

        let user = app_state.auth_service.validate_session(&token).await?;

        // Insere o usuário nos "extensions" da requisição
        parts.extensions.insert(user.clone());
        Ok(AuthenticatedUser(user))
    }
}
