//! Gate server for the mobile-only page.
//!
//! Serves the mobile page behind a User-Agent gate: mobile visitors pass
//! through, desktop visitors are redirected to the root route.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mobile_gate::{GateConfig, GateServer, UaClassifier};

#[derive(Debug, Parser)]
#[command(name = "mobile-gate", about = "User-Agent gate for the mobile-only page")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mobile_gate=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match &args.config {
        Some(path) => GateConfig::load(path)?,
        None => GateConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    let classifier = match &config.signals.file {
        Some(path) => UaClassifier::from_file(path)?,
        None => UaClassifier::from_embedded()?,
    }
    .with_redirect_target(config.gate.redirect_to.clone());

    tracing::info!(
        bind_address = %config.listener.bind_address,
        mobile_path = %config.gate.mobile_path,
        redirect_to = %config.gate.redirect_to,
        signals = classifier.signal_count(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = GateServer::new(&config, Arc::new(classifier));
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
