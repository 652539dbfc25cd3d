// src/services/seed_service.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    db::{RoleRepository, TheaterRepository, UserRepository},
    models::auth::{Role, User, ROLE_ADMIN, ROLE_USER},
    services::auth::AuthService,
};

const SEED_PASSWORD: &str = "Password123!";

const SEED_USERS: [(&str, &str); 3] = [
    ("galkadi", ROLE_ADMIN),
    ("bob", ROLE_USER),
    ("sue", ROLE_USER),
];

const SEED_THEATERS: [(&str, &str, i64); 4] = [
    ("AMC Palace 10", "123 Main St, Springfield", 150),
    ("Regal Cinema", "456 Elm St, Shelbyville", 200),
    ("Grand Theater", "789 Broadway Ave, Metropolis", 300),
    ("Vintage Drive-In", "101 Retro Rd, Smallville", 75),
];

// Garante os registros iniciais. Rodar N vezes equivale a rodar uma:
// nada que já existe é sobrescrito.
#[derive(Clone)]
pub struct SeedService {
    user_repo: UserRepository,
    role_repo: RoleRepository,
    theater_repo: TheaterRepository,
    pool: SqlitePool,
}

impl SeedService {
    pub fn new(
        user_repo: UserRepository,
        role_repo: RoleRepository,
        theater_repo: TheaterRepository,
        pool: SqlitePool,
    ) -> Self {
        Self { user_repo, role_repo, theater_repo, pool }
    }

    pub async fn run(&self) -> Result<(), AppError> {
        self.ensure_role(ROLE_ADMIN).await?;
        self.ensure_role(ROLE_USER).await?;

        for (username, role_name) in SEED_USERS {
            self.ensure_user(username, role_name).await?;
        }

        self.ensure_theaters().await?;

        tracing::info!("🌱 Dados iniciais garantidos.");
        Ok(())
    }

    async fn ensure_role(&self, name: &str) -> Result<Role, AppError> {
        if let Some(role) = self.role_repo.find_by_name(name).await? {
            return Ok(role);
        }
        self.role_repo.create_role(&self.pool, name).await
    }

    // Cria o usuário se ainda não existe e garante o vínculo com o cargo.
    async fn ensure_user(&self, username: &str, role_name: &str) -> Result<User, AppError> {
        let user = match self.user_repo.find_by_username(username).await? {
            Some(user) => user,
            None => {
                let hashed = AuthService::hash_password(SEED_PASSWORD).await?;
                self.user_repo.create_user(&self.pool, username, &hashed).await?
            }
        };

        let role = self
            .role_repo
            .find_by_name(role_name)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Cargo semeado ausente: {}", role_name))?;
        self.role_repo.assign_role(&self.pool, user.id, role.id).await?;

        Ok(user)
    }

    // Os cinemas de exemplo só entram quando a tabela está vazia,
    // para nunca sobrescrever registros já personalizados.
    async fn ensure_theaters(&self) -> Result<(), AppError> {
        if self.theater_repo.count().await? > 0 {
            return Ok(());
        }

        let bob = self
            .user_repo
            .find_by_username("bob")
            .await?
            .ok_or_else(|| anyhow::anyhow!("Usuário semeado ausente: bob"))?;

        for (name, address, seat_count) in SEED_THEATERS {
            self.theater_repo
                .create(name, address, seat_count, Some(bob.id))
                .await?;
        }

        Ok(())
    }
}
