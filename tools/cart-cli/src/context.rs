//! CLI execution context.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use turbo_cart::cart::{items_from_json, CartItem};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            find_config(&cwd)?.unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Read cart items from a JSON file, or stdin when the path is "-".
    pub fn load_items(&self, path: &str) -> Result<Vec<CartItem>> {
        let content = if path == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read items from stdin")?;
            buf
        } else {
            std::fs::read_to_string(self.cwd.join(path))
                .with_context(|| format!("Failed to read items file: {}", path))?
        };

        let items = items_from_json(&content)
            .with_context(|| format!("Failed to parse items file: {}", path))?;
        self.output
            .debug(&format!("Loaded {} item(s) from {}", items.len(), path));
        Ok(items)
    }
}

/// Find config file in directory tree.
///
/// The first file found wins; if it does not parse, that is an error.
fn find_config(start: &Path) -> Result<Option<CliConfig>> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                let path = config_path.to_string_lossy();
                let config = CliConfig::load(&path)
                    .with_context(|| format!("Failed to load config file: {}", path))?;
                return Ok(Some(config));
            }
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}
