//! Task-distribution analysis with a fixed fallback.

use crate::api::GeminiApi;
use crate::prompt::{build_distribution_prompt, RosterEntry};

/// Text returned whenever the analysis cannot be produced.
pub const FALLBACK_MESSAGE: &str =
    "Failed to analyze project distribution. Please check your API key or try again later.";

/// Produces markdown task-distribution recommendations.
pub struct DistributionAdvisor {
    api: GeminiApi,
}

impl DistributionAdvisor {
    pub fn new(api: GeminiApi) -> Self {
        Self { api }
    }

    /// Ask the model to distribute the project's work across `staff`.
    ///
    /// Returns the model's markdown unmodified. Errors are logged and replaced
    /// by [`FALLBACK_MESSAGE`]; this never fails.
    pub async fn analyze(&self, project_description: &str, staff: &[RosterEntry<'_>]) -> String {
        let prompt = build_distribution_prompt(project_description, staff);

        match self.api.generate_content(&prompt).await {
            Ok(text) => {
                tracing::info!(
                    staff_count = staff.len(),
                    response_len = text.len(),
                    "Distribution analysis completed"
                );
                text
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    model = %self.api.config().model,
                    staff_count = staff.len(),
                    "Distribution analysis failed"
                );
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
