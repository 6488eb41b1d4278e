//! Server bootstrap: logging, data source and the HTTP listener

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::HistoryRepository;
use crate::infrastructure::InMemoryHistoryRepository;
use crate::interfaces::http::create_api_router;

/// Initialise the global tracing subscriber from the logging config.
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

/// Sample histories ending roughly now.
pub fn demo_repository(config: &AppConfig) -> Arc<dyn HistoryRepository> {
    let count = config.demo.seed_records;
    let epoch = Utc::now() - Duration::minutes(count as i64);
    info!("Seeding {} demo histories", count);
    Arc::new(InMemoryHistoryRepository::seeded(count, epoch))
}

/// Serve the API until Ctrl+C / SIGTERM.
pub async fn run(
    config: &AppConfig,
    repo: Arc<dyn HistoryRepository>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_api_router(repo);

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API listening on http://{}", listener.local_addr()?);
    info!("Swagger UI at http://{}/docs", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on the first OS shutdown signal (SIGTERM, SIGINT).
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = tokio::signal::ctrl_c() => info!("Received SIGINT (Ctrl+C)"),
                }
            }
            Err(e) => {
                warn!("Failed to register SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
                info!("Received Ctrl+C");
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        info!("Received Ctrl+C");
    }
}
