//! Gemini client for AI-assisted task distribution.
//!
//! Builds a task-distribution prompt from a project description and the
//! staff roster, sends it to the Gemini `generateContent` REST endpoint, and
//! hands back the model's markdown verbatim. [`DistributionAdvisor`] never
//! fails: any error degrades to [`FALLBACK_MESSAGE`].

pub mod api;
pub mod config;
pub mod distribution;
pub mod prompt;

pub use api::{GeminiApi, GeminiApiError};
pub use config::GeminiConfig;
pub use distribution::{DistributionAdvisor, FALLBACK_MESSAGE};
pub use prompt::RosterEntry;
