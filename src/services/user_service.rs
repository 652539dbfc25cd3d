// src/services/user_service.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    db::{RoleRepository, UserRepository},
    models::auth::UserDto,
    services::auth::AuthService,
};

#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
    role_repo: RoleRepository,
    pool: SqlitePool,
}

impl UserService {
    pub fn new(user_repo: UserRepository, role_repo: RoleRepository, pool: SqlitePool) -> Self {
        Self { user_repo, role_repo, pool }
    }

    pub async fn create_user_with_roles(
        &self,
        username: &str,
        password: &str,
        roles: &[String],
    ) -> Result<UserDto, AppError> {
        // 1. Resolve os cargos ANTES de escrever qualquer coisa:
        // um cargo desconhecido não pode deixar usuário órfão para trás.
        let mut role_ids = Vec::with_capacity(roles.len());
        for name in roles {
            let role = self
                .role_repo
                .find_by_name(name)
                .await?
                .ok_or_else(|| AppError::UnknownRole(name.clone()))?;
            role_ids.push(role.id);
        }

        // 2. Hashing (pode ficar fora da transação, pois não toca no banco)
        let hashed_password = AuthService::hash_password(password).await?;

        // --- INÍCIO DA TRANSAÇÃO ---
        let mut tx = self.pool.begin().await?;

        // Note que passamos `&mut *tx` (o executor) em vez de `&self.pool`
        let new_user = self
            .user_repo
            .create_user(&mut *tx, username, &hashed_password)
            .await?; // Se falhar aqui, o tx sofre rollback automático ao sair do escopo (drop)

        for role_id in &role_ids {
            self.role_repo.assign_role(&mut *tx, new_user.id, *role_id).await?;
            // Se falhar aqui, o usuário criado acima é desfeito!
        }

        tx.commit().await?;
        // --- FIM DA TRANSAÇÃO ---

        let roles = self.role_repo.roles_of_user(new_user.id).await?;
        Ok(UserDto { id: new_user.id, username: new_user.username, roles })
    }

    pub async fn get_user(&self, id: i64) -> Result<UserDto, AppError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound)?;
        let roles = self.role_repo.roles_of_user(user.id).await?;
        Ok(UserDto { id: user.id, username: user.username, roles })
    }
}
