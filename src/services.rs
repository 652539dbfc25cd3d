pub mod auth;
pub mod seed_service;
pub mod theater_service;
pub mod user_service;
