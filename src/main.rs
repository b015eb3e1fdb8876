use clap::Parser;
use dotenvy::dotenv;
use std::env;

use petcare_tracker::api::{config::ApiConfig, routes::create_router};
use petcare_tracker::utils::{app_config::AppConfig, db::run_migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    let api_config = ApiConfig::parse();
    tracing::info!("API configuration loaded successfully");

    let app_config = AppConfig::connect(&api_config.database_url, api_config.db_pool_size)?;
    run_migrations(&app_config.pool)?;
    tracing::info!("Database ready");

    let router = create_router(app_config);

    let addr = api_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting Pet Care Tracker API server on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
