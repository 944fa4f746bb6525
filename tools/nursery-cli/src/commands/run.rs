//! Scripted cart session.
//!
//! A script is one action per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! add Snake Plant
//! set Snake Plant 3
//! inc Lavender
//! dec Lavender
//! remove Snake Plant
//! clear
//! ```

use anyhow::{anyhow, bail, Context as _, Result};
use nursery_cart::cart::{CartEvent, CartStore};
use nursery_cart::catalog::Catalog;
use nursery_cart::screen::CartScreen;

use super::RunArgs;
use crate::context::Context;
use crate::output::Output;

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Add(String),
    Set(String, i64),
    Increment(String),
    Decrement(String),
    Remove(String),
    Clear,
}

impl Step {
    /// Product the step acts on, if any.
    pub fn product_name(&self) -> Option<&str> {
        match self {
            Step::Add(name)
            | Step::Set(name, _)
            | Step::Increment(name)
            | Step::Decrement(name)
            | Step::Remove(name) => Some(name),
            Step::Clear => None,
        }
    }
}

/// Run the run command.
pub fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    let content = if args.script == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read script from stdin")?
    } else {
        let path = ctx.resolve_path(&args.script);
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?
    };
    let steps = parse_script(&content)?;

    let catalog = ctx.catalog()?;
    let mut cart = CartStore::new();

    if args.trace_changes {
        let output = ctx.output.clone();
        cart.subscribe(move |event, items| {
            output.list_item(&format!("{} ({} lines)", describe(event), items.len()));
        });
    }

    let skipped = apply_steps(&steps, &catalog, &mut cart, &ctx.output);
    if !skipped.is_empty() {
        ctx.output
            .debug(&format!("Skipped {} step(s) naming unknown products", skipped.len()));
    }

    ctx.output.cart_screen(&CartScreen::from_store(&cart));
    Ok(())
}

/// Apply steps in order and return the names that matched no product.
///
/// Unknown names are reported and skipped. Steps that leave the cart
/// unchanged are only mentioned in verbose mode.
pub fn apply_steps(
    steps: &[Step],
    catalog: &Catalog,
    cart: &mut CartStore,
    output: &Output,
) -> Vec<String> {
    let mut skipped = Vec::new();

    for step in steps {
        if let Some(name) = step.product_name() {
            if catalog.find(name).is_none() {
                output.warn(&format!("Unknown product '{}', skipped", name));
                skipped.push(name.to_string());
                continue;
            }
        }

        let changed = match step {
            Step::Add(name) => catalog.find(name).is_some_and(|product| cart.add(product)),
            Step::Set(name, quantity) => cart.set_quantity(name, *quantity),
            Step::Increment(name) => cart.increment(name),
            Step::Decrement(name) => cart.decrement(name),
            Step::Remove(name) => cart.remove(name),
            Step::Clear => cart.clear(),
        };

        if !changed {
            output.debug(&format!("No change: {:?}", step));
        }
    }

    skipped
}

/// Parse a whole script.
pub fn parse_script(content: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if let Some(step) =
            parse_line(line).with_context(|| format!("Invalid script line {}", index + 1))?
        {
            steps.push(step);
        }
    }
    Ok(steps)
}

fn parse_line(line: &str) -> Result<Option<Step>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let name = || -> Result<String> {
        if rest.is_empty() {
            bail!("'{}' needs a product name", verb);
        }
        Ok(rest.to_string())
    };

    let step = match verb.to_lowercase().as_str() {
        "add" => Step::Add(name()?),
        "inc" | "increment" => Step::Increment(name()?),
        "dec" | "decrement" => Step::Decrement(name()?),
        "remove" | "rm" => Step::Remove(name()?),
        "clear" => Step::Clear,
        "set" => {
            let (product, quantity) = rest
                .rsplit_once(char::is_whitespace)
                .ok_or_else(|| anyhow!("'set' needs a product name and a quantity"))?;
            let quantity: i64 = quantity
                .parse()
                .with_context(|| format!("Invalid quantity: {}", quantity))?;
            Step::Set(product.trim().to_string(), quantity)
        }
        other => bail!("Unknown action: {}", other),
    };

    Ok(Some(step))
}

fn describe(event: &CartEvent) -> String {
    match event {
        CartEvent::Added { name, quantity } => format!("added {} x{}", name, quantity),
        CartEvent::QuantityChanged { name, from, to } => {
            format!("{}: {} -> {}", name, from, to)
        }
        CartEvent::Removed { name } => format!("removed {}", name),
        CartEvent::Cleared => "cleared".to_string(),
    }
}
