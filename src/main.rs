use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use translate_serve::config::AppConfig;
use translate_serve::pipeline::TranslationPipeline;
use translate_serve::server::{build_router, AppState};

/// HTTP translation service backed by Groq chat completions.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Model identifier to use instead of the configured default.
    #[arg(long)]
    model: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "translate_serve=debug,tower_http=debug"
    } else {
        "translate_serve=info,tower_http=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .init();

    info!("translate-serve v{}", env!("CARGO_PKG_VERSION"));

    let mut config = AppConfig::from_env();
    config.server.host = cli.host;
    config.server.port = cli.port;
    if let Some(model) = cli.model {
        config.groq.model = model;
    }

    // Missing credential is fatal here, not a per-request error.
    config.validate()?;

    info!(
        model = %config.groq.model,
        base_url = %config.groq.base_url,
        "Configuration loaded"
    );

    let pipeline = Arc::new(TranslationPipeline::from_config(&config.groq)?);
    let app = build_router(AppState { pipeline });

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
