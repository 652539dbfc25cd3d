use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Nome de usuário já existe")]
    UsernameAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Sessão inválida")]
    InvalidSession,

    #[error("Acesso negado")]
    Forbidden,

    #[error("Cargo desconhecido: {0}")]
    UnknownRole(String),

    #[error("Gerente inexistente")]
    InvalidManagerReference,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Cinema não encontrado")]
    TheaterNotFound,

    // Variante para erros de banco de dados (exemplo com sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::UsernameAlreadyExists => {
                (StatusCode::CONFLICT, "Este nome de usuário já está em uso.".to_string())
            }
            AppError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, "Nome de usuário ou senha inválidos.".to_string())
            }
            AppError::InvalidSession => {
                (StatusCode::UNAUTHORIZED, "Sessão inválida ou ausente.".to_string())
            }
            AppError::Forbidden => {
                (StatusCode::FORBIDDEN, "Você não tem permissão para realizar esta ação.".to_string())
            }
            AppError::UnknownRole(name) => {
                (StatusCode::BAD_REQUEST, format!("O cargo '{}' não existe.", name))
            }
            AppError::InvalidManagerReference => {
                (StatusCode::BAD_REQUEST, "O gerente informado não existe.".to_string())
            }
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "Usuário não encontrado.".to_string()),
            AppError::TheaterNotFound => (StatusCode::NOT_FOUND, "Cinema não encontrado.".to_string()),

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` vai logar a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.".to_string())
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
