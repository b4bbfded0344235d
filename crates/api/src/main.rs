use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use nexa_api::config::ServerConfig;
use nexa_api::router::build_app_router;
use nexa_api::state::AppState;
use nexa_db::DbPool;
use nexa_gemini::{DistributionAdvisor, GeminiApi};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "nexa_api=debug,nexa_db=debug,nexa_gemini=info,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "Configuration loaded");

    let pool = open_database(&config.database_url).await;
    let advisor = Arc::new(build_advisor(&config));

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        advisor,
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!(%addr, "NEXA portal API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    close_database(pool, Duration::from_secs(config.shutdown_timeout_secs)).await;
}

/// Human-readable logs filtered by `RUST_LOG`, or [`DEFAULT_LOG_FILTER`].
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Open (creating if needed) the SQLite file and bring its schema up to date.
///
/// Any failure here is fatal: the portal cannot serve without its tables.
async fn open_database(database_url: &str) -> DbPool {
    let pool = nexa_db::create_pool(database_url)
        .await
        .expect("Failed to open database");

    nexa_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    nexa_db::run_migrations(&pool)
        .await
        .expect("Failed to apply database schema");

    if let Err(e) = nexa_db::verify_schema(&pool).await {
        panic!("Database at {database_url} cannot be used: {e}");
    }

    tracing::info!(%database_url, "Database ready");
    pool
}

fn build_advisor(config: &ServerConfig) -> DistributionAdvisor {
    if config.gemini.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; distribution requests will get the fallback text");
    }
    let api = GeminiApi::new(config.gemini.clone()).expect("Failed to build Gemini HTTP client");
    DistributionAdvisor::new(api)
}

async fn close_database(pool: DbPool, limit: Duration) {
    tracing::info!("Closing database pool");
    if tokio::time::timeout(limit, pool.close()).await.is_err() {
        tracing::warn!(timeout_secs = limit.as_secs(), "Database pool did not close in time");
    }
    tracing::info!("Shutdown complete");
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT received, draining connections"),
        () = terminate => tracing::info!("SIGTERM received, draining connections"),
    }
}
