//! Hullcheck - Command-line entry point
//!
//! Runs the validation HTTP service, or validates a single document file.

use anyhow::{Context, Result};
use clap::Parser;
use hullcheck_server::{build_pipeline, config::ServerConfig, start_server, Cli, Command};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    init_tracing(&config);

    match cli.command {
        Command::Serve => start_server(config).await?,
        Command::Check(args) => {
            let text = std::fs::read_to_string(&args.file)
                .with_context(|| format!("Failed to read {}", args.file.display()))?;

            let pipeline = build_pipeline(&config)?;
            let response = pipeline.run(&text).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

/// Log to stderr; RUST_LOG wins over the configured level
fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
