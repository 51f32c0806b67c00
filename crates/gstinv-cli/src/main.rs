//! CLI application for GST invoice digitization.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, category, config, exports, process};

/// GST invoice digitization - extract invoice fields from OCR text and predict taxes
#[derive(Parser)]
#[command(name = "gstinv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a single OCR text file
    Process(process::ProcessArgs),

    /// Process multiple OCR text files
    Batch(batch::BatchArgs),

    /// Check or correct tax categories
    Category(category::CategoryArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Manage saved exports
    Exports(exports::ExportsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // stdout carries command output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Process(args) => process::run(args, cli.config.as_deref()).await,
        Commands::Batch(args) => batch::run(args, cli.config.as_deref()).await,
        Commands::Category(args) => category::run(args).await,
        Commands::Config(args) => config::run(args, cli.config.as_deref()).await,
        Commands::Exports(args) => exports::run(args, cli.config.as_deref()).await,
    }
}
