//! Formput - HTTP PUT multipart file uploader
//!
//! Thin driver around the library: loads a config file, runs one upload,
//! and exits non-zero if it fails.

use anyhow::Context;
use clap::Parser;
use formput::{Config, PutUploader, Uploader};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Formput - upload a file over HTTP PUT with a multipart body
#[derive(Parser, Debug)]
#[command(name = "formput")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Formput v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load(&args.config)
        .with_context(|| format!("loading configuration from {:?}", args.config))?;
    info!("Loaded configuration from {:?}", args.config);

    let uploader = PutUploader::new(config.endpoint.clone(), config.timeout());

    let outcome = uploader
        .upload(
            &config.upload.file,
            &config.upload.destination,
            config.upload.output,
        )
        .await
        .with_context(|| format!("uploading {:?}", config.upload.file))?;

    info!(
        url = %outcome.url,
        bytes_sent = outcome.bytes_sent,
        "Upload completed"
    );

    Ok(())
}
