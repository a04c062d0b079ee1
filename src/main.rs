use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use overtime_control::api::{AppState, create_router};
use overtime_control::config::{CalculatorConfig, ConfigLoader};

/// Monthly earnings and overtime calculator.
///
/// Serves `POST /calculate`, which takes the raw text of the earnings form
/// fields and returns the computed figures.
#[derive(Debug, Parser)]
#[command(name = "overtime-control")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the YAML configuration file. Built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding `server.bind_address`.
    #[arg(short, long)]
    bind: Option<SocketAddr>,
}

/// Initialise the tracing subscriber.
///
/// Honours `RUST_LOG` when set and falls back to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display()))?,
        None => ConfigLoader::from_config(CalculatorConfig::default())
            .context("Built-in configuration is invalid")?,
    };

    let addr = match cli.bind {
        Some(addr) => addr,
        None => loader.bind_address()?,
    };

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(address = %addr, "Serving earnings calculator");
    axum::serve(listener, create_router(AppState::new(loader)))
        .await
        .context("Server error")?;

    Ok(())
}
