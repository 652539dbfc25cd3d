// src/db/role_repo.rs

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{common::error::AppError, models::auth::Role};

#[derive(Clone)]
pub struct RoleRepository {
    pool: SqlitePool,
}

impl RoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // Busca um cargo pelo nome
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AppError> {
        let maybe_role =
            sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;
        Ok(maybe_role)
    }

    // Cria um cargo
    pub async fn create_role<'e, E>(&self, executor: E, name: &str) -> Result<Role, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let role = sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO roles (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(executor)
        .await?;

        Ok(role)
    }

    // Vincula Usuário <-> Cargo. O vínculo é aditivo e idempotente:
    // repetir a mesma atribuição não é um erro.
    pub async fn assign_role<'e, E>(
        &self,
        executor: E,
        user_id: i64,
        role_id: i64,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO user_roles (user_id, role_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(role_id)
        .execute(executor)
        .await?;

        Ok(())
    }

    // Lista os nomes dos cargos de um usuário
    pub async fn roles_of_user(&self, user_id: i64) -> Result<Vec<String>, AppError> {
        let roles = sqlx::query_scalar::<_, String>(
            r#"
            SELECT r.name
            FROM roles r
            JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = $1
            ORDER BY r.name
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(roles)
    }
}
