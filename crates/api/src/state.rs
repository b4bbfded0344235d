use std::sync::Arc;

use nexa_gemini::DistributionAdvisor;

use crate::config::ServerConfig;

/// Handler state, built once in `main` (or per test) and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: nexa_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Gemini-backed task distribution advisor.
    pub advisor: Arc<DistributionAdvisor>,
}
