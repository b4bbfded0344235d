//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Multi-statement writes
//! run inside a single transaction.

pub mod dashboard_repo;
pub mod project_repo;
pub mod staff_repo;
pub mod user_repo;

pub use dashboard_repo::DashboardRepo;
pub use project_repo::ProjectRepo;
pub use staff_repo::StaffRepo;
pub use user_repo::UserRepo;
