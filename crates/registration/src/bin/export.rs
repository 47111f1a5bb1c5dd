use anyhow::Context;
use clap::Parser;
use registration::{
    Credentials, DEFAULT_BASE_URL, DataMode, RegistrationPipeline, ShootnScoreItClient,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sns-export")]
#[command(about = "Export a Shoot'n Score It match registration as a PractiScore CSV", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(short, long)]
    match_id: String,

    #[arg(short, long, env = "SNS_USERNAME")]
    username: String,

    #[arg(short, long, env = "SNS_PASSWORD", hide_env_values = true)]
    password: String,

    /// Query Shoot'n Score It instead of the built-in dummy data
    #[arg(long)]
    live: bool,

    #[arg(long, env = "SNS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("sns_export={},registration={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mode = if cli.live {
        DataMode::Live
    } else {
        DataMode::Dummy
    };
    if mode.is_live() {
        tracing::info!("Running in live mode - will query {}", cli.base_url);
    } else {
        tracing::info!("Running in dummy mode - will use local dummy data");
    }

    let client = ShootnScoreItClient::with_base_url(&cli.base_url, mode)
        .context("Failed to build Shoot'n Score It client")?;
    let credentials = Credentials::new(cli.username, cli.password);

    let pipeline = RegistrationPipeline::new(&client, &cli.match_id, &credentials)
        .context("Invalid export request")?;
    let registration = pipeline
        .run()
        .await
        .with_context(|| format!("Failed to fetch registration for match {}", cli.match_id))?;

    if let Some(starts) = registration.match_info.starts {
        tracing::info!(
            "Match '{}' starts on {}",
            registration.match_info.name,
            starts.format("%Y-%m-%d")
        );
    }

    let path = registration
        .write_csv(&cli.output)
        .await
        .with_context(|| format!("Failed to write CSV into {}", cli.output.display()))?;

    tracing::info!(
        "✓ Wrote {} competitors to {}",
        registration.competitors.len(),
        path.display()
    );

    Ok(())
}
