use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nelbac_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "nelbac")]
#[command(author, version, about = "Terminal showcase for the Nelbac irrigation controller line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Print the product catalog
    Catalog,
    /// Ask the smart advisor a single question
    Ask {
        /// The question to ask
        prompt: String,
    },
    /// Clear the persisted advisor transcript
    ClearChat,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // Logs go to stderr so the alternate screen stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Catalog) => commands::catalog::run(&config),
        Some(Commands::Ask { prompt }) => commands::ask::run(&config, &prompt).await,
        Some(Commands::ClearChat) => commands::clear_chat::run(&config).await,
    }
}
