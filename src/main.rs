//! Values Store API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;

use values_store::infrastructure::driven_adapters::config::AppConfig;
use values_store::infrastructure::driven_adapters::database;
use values_store::infrastructure::driven_adapters::record_repository::PostgresRecordRepository;
use values_store::infrastructure::driving_adapters::api_rest::{build_app, AppState};
use values_store::shared::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    // Load and validate configuration before touching the network
    let config = AppConfig::load()
        .inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))?;
    tracing::info!("Configuration loaded successfully");

    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    database::verify_connection(&pool).await?;
    tracing::info!("Connected to record store");

    database::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    let record_repository = Arc::new(PostgresRecordRepository::new(pool.clone()));
    let app = build_app(AppState::new(record_repository));

    let addr = config.server.address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);

    let served = axum::serve(listener, app).await;
    pool.close().await;
    served?;

    Ok(())
}
