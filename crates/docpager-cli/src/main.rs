use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docpager_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "docpager")]
#[command(author, version, about = "A terminal viewer for rendered documentation pages")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page document to open (shorthand for `run`)
    page: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a page document in the viewer
    Run {
        /// Path to the rendered page document (JSON)
        page: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging on stderr; the TUI owns stdout
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

    tracing::info!(
        "docpager {} — terminal documentation viewer",
        env!("CARGO_PKG_VERSION")
    );

    let cli = Cli::parse();

    let page = match cli.command {
        Some(Commands::Run { page }) => page,
        None => match cli.page {
            Some(page) => page,
            None => anyhow::bail!("no page document given; try: docpager run <PAGE>"),
        },
    };

    commands::run::run(config, page).await
}
