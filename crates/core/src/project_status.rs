//! Project status values.
//!
//! Status is stored as free text; these are the values the portal writes and
//! the ones the dashboard counts against.

/// Status assigned to every newly created project.
pub const PLANNING: &str = "Planning";

/// Terminal status. Every other value counts as active.
pub const COMPLETED: &str = "Completed";

/// Whether a project with this status still counts as active.
pub fn is_active(status: &str) -> bool {
    status != COMPLETED
}
