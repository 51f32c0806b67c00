//! Exports command - manage files in the exports directory.

use clap::{Args, Subcommand};
use console::style;

use gstinv_core::export::cleanup_old_exports;

use super::load_config;

/// Arguments for the exports command.
#[derive(Args)]
pub struct ExportsArgs {
    #[command(subcommand)]
    command: ExportsCommand,
}

#[derive(Subcommand)]
enum ExportsCommand {
    /// Delete exports older than the given number of days
    Clean {
        /// Minimum age in days
        #[arg(short, long, default_value = "7")]
        days: u64,
    },
}

pub async fn run(args: ExportsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    match args.command {
        ExportsCommand::Clean { days } => {
            let removed = cleanup_old_exports(&config.export, days)?;
            println!(
                "{} Removed {} export(s) older than {} days from {}",
                style("✓").green(),
                removed,
                days,
                config.export.export_dir.display()
            );
        }
    }

    Ok(())
}
