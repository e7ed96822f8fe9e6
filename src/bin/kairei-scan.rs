use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use kairei_scanner::{
    config::NetworkConfig, network::Network, source::SourceFile, ScanError, ScanResult,
};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Scan a file with a configured matcher cascade", long_about = None)]
struct Cli {
    /// Path to the network config (JSON)
    #[arg(short, long, default_value = "scanner.json")]
    config: PathBuf,

    /// Reject malformed patterns instead of disabling their matchers
    #[arg(long)]
    strict: bool,

    /// Source file to scan
    file: PathBuf,
}

async fn run(cli: &Cli) -> ScanResult<()> {
    let mut config = NetworkConfig::from_file(&cli.config)?;
    if cli.strict {
        config.strict_patterns = true;
    }
    debug!(matchers = config.matchers.len(), "config loaded");

    let data = std::fs::read(&cli.file).map_err(|e| {
        ScanError::Config(format!("Failed to read {}: {}", cli.file.display(), e))
    })?;
    let file = Arc::new(SourceFile::new(cli.file.display().to_string(), data));

    let mut network = Network::build(&config).await?;
    let tokens = network.tokenize(file.clone()).await?;
    network.shutdown().await?;

    for token in tokens {
        let (line, column) = file.line_col(token.pos);
        let label = token
            .token_type
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        println!("{}:{} {} {:?}", line, column, label, token.value);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
