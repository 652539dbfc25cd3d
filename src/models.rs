pub mod auth;
pub mod theater;
