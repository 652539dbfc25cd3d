pub mod user_repo;
pub use user_repo::UserRepository;
pub mod role_repo;
pub use role_repo::RoleRepository;
pub mod theater_repo;
pub use theater_repo::TheaterRepository;
pub mod session_repo;
pub use session_repo::SessionRepository;
