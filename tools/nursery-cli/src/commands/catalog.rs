//! Catalog listing command.

use anyhow::{bail, Result};

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    let categories: Vec<_> = match args.category.as_deref() {
        Some(name) => match catalog.category(name) {
            Some(category) => vec![category],
            None => bail!("Unknown category: {}", name),
        },
        None => catalog.categories().iter().collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    for category in categories {
        ctx.output.header(category.name.as_str());
        if category.is_empty() {
            ctx.output.info("No plants in this category.");
            continue;
        }
        for product in &category.products {
            ctx.output
                .product(product, ctx.config.display.show_descriptions);
        }
    }

    Ok(())
}
