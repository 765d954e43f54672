//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod birthday_repo;
pub mod congratulation_repo;
pub mod role_repo;
pub mod session_repo;
pub mod tag_repo;
pub mod user_repo;

pub use birthday_repo::BirthdayRepo;
pub use congratulation_repo::CongratulationRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use tag_repo::TagRepo;
pub use user_repo::UserRepo;
