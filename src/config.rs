// src/config.rs

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{RoleRepository, SessionRepository, TheaterRepository, UserRepository},
    services::{
        auth::AuthService, seed_service::SeedService, theater_service::TheaterService,
        user_service::UserService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub theater_service: TheaterService,
    pub seed_service: SeedService,
}

impl AppState {
    // A assinatura retorna um Result: quem chama decide o que fazer se falhar.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://theaters.db?mode=rwc".to_string());

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool))
    }

    // --- Monta o gráfico de dependências ---
    // Separado de `new` para que os testes montem o estado sobre um pool próprio.
    pub fn from_pool(db_pool: SqlitePool) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let role_repo = RoleRepository::new(db_pool.clone());
        let theater_repo = TheaterRepository::new(db_pool.clone());
        let session_repo = SessionRepository::new(db_pool.clone());

        let auth_service =
            AuthService::new(user_repo.clone(), role_repo.clone(), session_repo);
        let user_service =
            UserService::new(user_repo.clone(), role_repo.clone(), db_pool.clone());
        let theater_service = TheaterService::new(theater_repo.clone(), user_repo.clone());
        let seed_service =
            SeedService::new(user_repo, role_repo, theater_repo, db_pool.clone());

        Self { db_pool, auth_service, user_service, theater_service, seed_service }
    }
}
