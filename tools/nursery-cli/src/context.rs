//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use nursery_cart::catalog::{Catalog, CatalogLoad};

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["nursery.toml", ".nursery.toml", "nursery.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Catalog path from the command line.
    catalog_override: Option<String>,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        catalog_override: Option<String>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            cwd,
            catalog_override,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the catalog and report any listings that were dropped.
    pub fn catalog(&self) -> Result<Catalog> {
        let load = self.load_catalog()?;

        for rejected in &load.rejected {
            self.output.warn(&format!(
                "{} ({}): price unavailable, {}",
                rejected.name, rejected.category, rejected.error
            ));
        }

        Ok(load.catalog)
    }

    /// Load the configured catalog, or the bundled one.
    fn load_catalog(&self) -> Result<CatalogLoad> {
        match self.catalog_path() {
            Some(path) => load_catalog_file(&path),
            None => Catalog::builtin().context("Bundled catalog is invalid"),
        }
    }

    /// Catalog path, command line first, then config.
    fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_override
            .as_deref()
            .or(self.config.catalog.path.as_deref())
            .map(|p| self.resolve_path(p))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

fn load_catalog_file(path: &Path) -> Result<CatalogLoad> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

    let load = if path.extension().is_some_and(|e| e == "toml") {
        Catalog::from_toml_str(&content)
    } else {
        Catalog::from_json_str(&content)
    };

    load.with_context(|| format!("Failed to parse catalog: {}", path.display()))
}
