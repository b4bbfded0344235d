//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database row
//! and, where the entity can be created over the API, a `Deserialize` create
//! DTO carrying its `validator` rules.

pub mod dashboard;
pub mod project;
pub mod project_member;
pub mod staff;
pub mod user;
