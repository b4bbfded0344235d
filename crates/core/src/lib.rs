//! Domain primitives shared by the NEXA crates.
//!
//! No I/O lives here: only id types, the error taxonomy, and small pure
//! helpers used by both the persistence and HTTP layers.

pub mod error;
pub mod ids;
pub mod project_status;
pub mod text;
pub mod types;
pub mod validation;
