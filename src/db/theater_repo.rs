// src/db/theater_repo.rs

use sqlx::SqlitePool;

use crate::{common::error::AppError, models::theater::Theater};

#[derive(Clone)]
pub struct TheaterRepository {
    pool: SqlitePool,
}

impl TheaterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Theater>, AppError> {
        let maybe_theater = sqlx::query_as::<_, Theater>(
            r#"
            SELECT id, name, address, seat_count, manager_id, created_at, updated_at
            FROM theaters
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_theater)
    }

    pub async fn list_all(&self) -> Result<Vec<Theater>, AppError> {
        let theaters = sqlx::query_as::<_, Theater>(
            r#"
            SELECT id, name, address, seat_count, manager_id, created_at, updated_at
            FROM theaters
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(theaters)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM theaters")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn create(
        &self,
        name: &str,
        address: &str,
        seat_count: i64,
        manager_id: Option<i64>,
    ) -> Result<Theater, AppError> {
        let now = chrono::Utc::now();
        let theater = sqlx::query_as::<_, Theater>(
            r#"
            INSERT INTO theaters (name, address, seat_count, manager_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, address, seat_count, manager_id, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(address)
        .bind(seat_count)
        .bind(manager_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(theater)
    }

    // Sobrescrita completa: o gerente pode ser trocado ou limpo.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        address: &str,
        seat_count: i64,
        manager_id: Option<i64>,
    ) -> Result<Theater, AppError> {
        let now = chrono::Utc::now();
        let theater = sqlx::query_as::<_, Theater>(
            r#"
            UPDATE theaters
            SET name = $1, address = $2, seat_count = $3, manager_id = $4, updated_at = $5
            WHERE id = $6
            RETURNING id, name, address, seat_count, manager_id, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(address)
        .bind(seat_count)
        .bind(manager_id)
        .bind(now)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(theater)
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM theaters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
