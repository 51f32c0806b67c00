//! Category command - check or correct item tax categories.

use clap::{Args, Subcommand};
use console::style;

use gstinv_core::{categorize, update_tax_category, TaxCategory};

/// Arguments for the category command.
#[derive(Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    command: CategoryCommand,
}

#[derive(Subcommand)]
enum CategoryCommand {
    /// Show the category and GST rate predicted for an item description
    Check {
        /// Item description
        description: String,
    },

    /// Submit a category correction for an item description
    Update {
        /// Item description
        description: String,
        /// Correct category (goods, services, exempt, luxury, essential)
        category: String,
    },

    /// List categories and their rates
    List,
}

pub async fn run(args: CategoryArgs) -> anyhow::Result<()> {
    match args.command {
        CategoryCommand::Check { description } => {
            let category = categorize(&description);
            println!("{}: {} ({}%)", description, category, category.rate());
        }
        CategoryCommand::Update {
            description,
            category,
        } => {
            if !update_tax_category(&description, &category) {
                let known: Vec<&str> = TaxCategory::ALL.iter().map(|c| c.as_str()).collect();
                anyhow::bail!(
                    "Unknown category: {}. Expected one of: {}",
                    category,
                    known.join(", ")
                );
            }
            println!(
                "{} Category correction accepted for '{}'",
                style("✓").green(),
                description
            );
        }
        CategoryCommand::List => {
            for category in TaxCategory::ALL {
                println!("{:<10} {}%", category.as_str(), category.rate());
            }
        }
    }

    Ok(())
}
