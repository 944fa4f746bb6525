//! Nursery CLI - Terminal storefront for the plant nursery.
//!
//! Commands:
//! - `nursery catalog` - List the product catalog
//! - `nursery shop` - Browse the catalog and manage a cart interactively
//! - `nursery run` - Apply a script of cart actions and print the cart
//! - `nursery config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ConfigArgs, RunArgs, ShopArgs};

/// Nursery CLI - Browse plants and manage a shopping cart
#[derive(Parser)]
#[command(name = "nursery")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog file path (overrides the config file)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog
    Catalog(CatalogArgs),

    /// Browse the catalog and manage a cart interactively
    Shop(ShopArgs),

    /// Apply a script of cart actions and print the resulting cart
    Run(RunArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, cli.catalog.clone(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Logging goes to stderr so it never mixes with JSON output
    logging::init(cli.verbose, &ctx.config.logging);

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Run(args) => commands::run::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
