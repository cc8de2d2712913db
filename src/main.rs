use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use http_relay::config::load_config;
use http_relay::egress;
use http_relay::http::RelayServer;
use http_relay::lifecycle::{signals, Shutdown};

#[derive(Parser)]
#[command(name = "http-relay")]
#[command(about = "Transparent HTTP relay with optional forward-proxy egress")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "http_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Any configuration failure aborts here, before the listener binds.
    let config = Arc::new(load_config(&args.config)?);

    tracing::info!(
        target_url = %config.target_url,
        app_port = config.app_port,
        proxied = config.uses_proxy(),
        error_status = config.error_status,
        "Configuration loaded"
    );

    let proxy = egress::proxy_url::build(
        &config.proxy_url,
        &config.proxy_username,
        &config.proxy_password,
    )?;
    let client = egress::build_client(proxy)?;

    let listener = TcpListener::bind(("0.0.0.0", config.app_port)).await?;

    let shutdown = Arc::new(Shutdown::new());
    signals::shutdown_on_ctrl_c(shutdown.clone());

    let server = RelayServer::new(config, client);
    server.run(listener, shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
