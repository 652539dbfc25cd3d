// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{RoleRepository, SessionRepository, UserRepository},
    models::auth::{CurrentUser, UserDto},
};

// Janela deslizante da sessão
pub const SESSION_TTL_MINUTES: i64 = 60;

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    role_repo: RoleRepository,
    session_repo: SessionRepository,
}

impl AuthService {
    pub fn new(
        user_repo: UserRepository,
        role_repo: RoleRepository,
        session_repo: SessionRepository,
    ) -> Self {
        Self { user_repo, role_repo, session_repo }
    }

    // Gera o hash da senha em um thread separado, pois bcrypt é caro.
    pub async fn hash_password(password: &str) -> Result<String, AppError> {
        let password_clone = password.to_owned();
        let hashed = tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
        Ok(hashed)
    }

    pub async fn login_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(UserDto, String), AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid = tokio::task::spawn_blocking(move || {
            verify(&password_clone, &password_hash_clone)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        let roles = self.role_repo.roles_of_user(user.id).await?;
        let token = self.create_session(user.id).await?;

        Ok((UserDto { id: user.id, username: user.username, roles }, token))
    }

    // Valida o token de sessão e recarrega usuário e cargos do banco.
    // Sessões vencidas são removidas na hora; sessões na segunda metade
    // da janela são renovadas por mais SESSION_TTL_MINUTES.
    pub async fn validate_session(&self, token: &str) -> Result<CurrentUser, AppError> {
        let session = self
            .session_repo
            .find_by_token(token)
            .await?
            .ok_or(AppError::InvalidSession)?;

        let now = Utc::now();
        if session.expires_at <= now {
            self.session_repo.delete(token).await?;
            return Err(AppError::InvalidSession);
        }

        if session.expires_at - now < Duration::minutes(SESSION_TTL_MINUTES / 2) {
            self.session_repo
                .extend(token, now + Duration::minutes(SESSION_TTL_MINUTES))
                .await?;
        }

        let user = self
            .user_repo
            .find_by_id(session.user_id)
            .await?
            .ok_or(AppError::InvalidSession)?;
        let roles = self.role_repo.roles_of_user(user.id).await?;

        Ok(CurrentUser { id: user.id, username: user.username, roles })
    }

    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        self.session_repo.delete(token).await
    }

    async fn create_session(&self, user_id: i64) -> Result<String, AppError> {
        let token = Uuid::new_v4().to_string();
        let now = Utc::now();
        self.session_repo
            .create(&token, user_id, now, now + Duration::minutes(SESSION_TTL_MINUTES))
            .await?;
        Ok(token)
    }
}
