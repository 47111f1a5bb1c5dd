use anyhow::Context;
use registration::ShootnScoreItClient;

mod config;
mod error;
mod features;
mod openapi;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Shoot'n Score It to PractiScore service");

    let config = Config::from_env().context("Failed to load service configuration")?;
    tracing::info!("Configuration loaded successfully");

    if config.mode.is_live() {
        tracing::info!(
            "Running in live mode - will query Shoot'n Score It at {}",
            config.sns_base_url
        );
    } else {
        tracing::info!("Running in dummy mode - will use local dummy data");
    }

    let client = ShootnScoreItClient::with_base_url(&config.sns_base_url, config.mode)
        .context("Failed to build Shoot'n Score It client")?;
    let app = routes::router(AppState::new(client));

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "OpenAPI document available at http://{}/api-docs/openapi.json",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
