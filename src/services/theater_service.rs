// src/services/theater_service.rs

use crate::{
    common::error::AppError,
    db::{TheaterRepository, UserRepository},
    models::{
        auth::CurrentUser,
        theater::{Theater, TheaterDto, TheaterPayload},
    },
};

// A regra central de autorização: Admin sempre pode; o gerente atribuído
// pode; um cinema sem gerente só é alterável por Admin.
pub fn can_modify_theater(requester: &CurrentUser, theater: &Theater) -> bool {
    requester.is_admin() || theater.manager_id == Some(requester.id)
}

#[derive(Clone)]
pub struct TheaterService {
    theater_repo: TheaterRepository,
    user_repo: UserRepository,
}

impl TheaterService {
    pub fn new(theater_repo: TheaterRepository, user_repo: UserRepository) -> Self {
        Self { theater_repo, user_repo }
    }

    pub async fn list(&self) -> Result<Vec<TheaterDto>, AppError> {
        let theaters = self.theater_repo.list_all().await?;
        Ok(theaters.into_iter().map(TheaterDto::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<TheaterDto, AppError> {
        let theater = self
            .theater_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::TheaterNotFound)?;
        Ok(theater.into())
    }

    pub async fn create(&self, payload: &TheaterPayload) -> Result<TheaterDto, AppError> {
        self.resolve_manager(payload.manager_id).await?;

        let theater = self
            .theater_repo
            .create(&payload.name, &payload.address, payload.seat_count, payload.manager_id)
            .await?;
        Ok(theater.into())
    }

    // A ordem das checagens importa: inexistente responde 404 antes de
    // revelar qualquer coisa sobre permissões, e nada é escrito enquanto
    // houver checagem pendente.
    pub async fn update(
        &self,
        requester: &CurrentUser,
        id: i64,
        payload: &TheaterPayload,
    ) -> Result<TheaterDto, AppError> {
        let theater = self
            .theater_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::TheaterNotFound)?;

        if !can_modify_theater(requester, &theater) {
            return Err(AppError::Forbidden);
        }

        self.resolve_manager(payload.manager_id).await?;

        let updated = self
            .theater_repo
            .update(id, &payload.name, &payload.address, payload.seat_count, payload.manager_id)
            .await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: i64) -> Result<i64, AppError> {
        let rows = self.theater_repo.delete(id).await?;
        if rows == 0 {
            return Err(AppError::TheaterNotFound);
        }
        Ok(id)
    }

    // Um gerente informado precisa existir; omitido é permitido.
    async fn resolve_manager(&self, manager_id: Option<i64>) -> Result<(), AppError> {
        if let Some(id) = manager_id {
            if !self.user_repo.exists(id).await? {
                return Err(AppError::InvalidManagerReference);
            }
        }
        Ok(())
    }
}
