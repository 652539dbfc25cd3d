// src/models/theater.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// Representa um cinema vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Theater {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub seat_count: i64,
    pub manager_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Resposta pública de cinema
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TheaterDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub seat_count: i64,
    pub manager_id: Option<i64>,
}

impl From<Theater> for TheaterDto {
    fn from(theater: Theater) -> Self {
        Self {
            id: theater.id,
            name: theater.name,
            address: theater.address,
            seat_count: theater.seat_count,
            manager_id: theater.manager_id,
        }
    }
}

// Dados para criação e atualização (sobrescrita completa)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TheaterPayload {
    #[validate(
        custom(function = "not_blank"),
        length(max = 120, message = "O nome deve ter no máximo 120 caracteres.")
    )]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub address: String,
    #[validate(range(min = 1, message = "A quantidade de assentos deve ser maior que zero."))]
    pub seat_count: i64,
    pub manager_id: Option<i64>,
}

// Rejeita strings vazias ou só com espaços
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("O campo não pode ficar em branco.".into());
        return Err(err);
    }
    Ok(())
}
