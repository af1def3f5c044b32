//! Frases Server
//!
//! REST API serving random motivational quotes from a fixed local list.

use anyhow::Context;
use clap::Parser;
use frases_server::config::{build_config, CliArgs as ConfigCliArgs};
use frases_server::quotes::QuoteList;
use frases_server::server::Server;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Frases Server - random motivational quotes over HTTP
#[derive(Parser, Debug)]
#[command(name = "frases_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "FRASES_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Path to the JSON quote file
    #[arg(long, env = "FRASES_QUOTES_PATH", value_name = "FILE")]
    quotes: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "FRASES_LOG_LEVEL")]
    log_level: Option<String>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            quotes_path: args.quotes,
            log_level: args.log_level,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!("frases_server v{}", frases_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = config.port,
        quotes_path = %config.quotes_path.display(),
        log_level = %config.log_level,
        "Configuration loaded"
    );

    // Fail fast before binding anything when the quote file is unusable
    let quotes = QuoteList::load(&config.quotes_path)
        .with_context(|| format!("failed to load quotes from {}", config.quotes_path.display()))?;
    tracing::info!(count = quotes.len(), "Quote list loaded");

    let server = Server::new(config, quotes);
    server.run().await.context("server error")?;

    Ok(())
}
