//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod run;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only list this category.
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Start on the cart screen instead of the product list.
    #[arg(long)]
    pub cart_first: bool,
}

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Script file, one action per line (`-` for stdin).
    pub script: String,

    /// Print every cart change as it happens.
    #[arg(long)]
    pub trace_changes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file and the catalog it points at.
    Validate,
}
