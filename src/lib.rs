// src/lib.rs

pub mod common;
pub mod config;
pub mod db;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{
    routing::{get, post},
    Router,
};

use crate::config::AppState;

// Migrações embutidas no binário, aplicadas na inicialização.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

// Monta o router completo da aplicação
pub fn router(app_state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/me", get(handlers::auth::get_me))
        .route("/logout", post(handlers::auth::logout))
        .route("/register", post(handlers::auth::register));

    let theater_routes = Router::new()
        .route(
            "/",
            get(handlers::theaters::list_theaters).post(handlers::theaters::create_theater),
        )
        .route(
            "/{id}",
            get(handlers::theaters::get_theater)
                .put(handlers::theaters::update_theater)
                .delete(handlers::theaters::delete_theater),
        );

    let user_routes = Router::new()
        .route("/", post(handlers::users::create_user))
        .route("/{id}", get(handlers::users::get_user));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/authentication", auth_routes)
        .nest("/api/theaters", theater_routes)
        .nest("/api/users", user_routes)
        .with_state(app_state)
}
