//! solarsite-api: HTTP query service for solar site assessment.
//!
//! Exposes a single read-only endpoint, `GET /solar?lat=..&lon=..`,
//! returning estimated irradiation figures and the distance to the
//! nearest coastline reference point.

mod error;
mod routes;
mod types;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "solarsite-api")]
#[command(about = "Solar irradiation and distance-to-coast query service")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, env = "SOLARSITE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "SOLARSITE_PORT", default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        %addr,
        version = env!("CARGO_PKG_VERSION"),
        "solarsite-api listening"
    );

    axum::serve(listener, routes::router()).await?;

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    Ok(())
}
