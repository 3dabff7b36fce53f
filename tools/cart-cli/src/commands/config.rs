//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use tracing_subscriber::EnvFilter;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[display]");
    ctx.output.kv("symbol", &ctx.config.display.symbol);

    let notices = &ctx.config.notices;
    ctx.output.info("[notices]");
    ctx.output.kv("discount_message", &notices.discount_message);
    ctx.output
        .kv("discount_duration_ms", &notices.discount_duration_ms.to_string());
    ctx.output.kv("discount_icon", &notices.discount_icon);
    ctx.output.kv("checkout_message", &notices.checkout_message);
    ctx.output.kv("checkout_icon", &notices.checkout_icon);

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output
        .kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("cart.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Collect configuration errors and warnings.
fn check_config(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if config.display.symbol.is_empty() {
        warnings.push("display.symbol is empty; amounts will print without a symbol".to_string());
    }

    if config.notices.discount_duration_ms == 0 {
        errors.push("notices.discount_duration_ms must be greater than 0".to_string());
    }

    if config.notices.discount_message.trim().is_empty() {
        errors.push("notices.discount_message is required".to_string());
    }

    if config.notices.checkout_message.trim().is_empty() {
        errors.push("notices.checkout_message is required".to_string());
    }

    if let Err(e) = EnvFilter::try_new(&config.logging.level) {
        errors.push(format!(
            "logging.level '{}' is not a valid filter: {}",
            config.logging.level, e
        ));
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_clean() {
        let (errors, warnings) = check_config(&CliConfig::default());
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_zero_duration_is_error() {
        let mut config = CliConfig::default();
        config.notices.discount_duration_ms = 0;
        let (errors, _) = check_config(&config);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_empty_symbol_is_warning() {
        let mut config = CliConfig::default();
        config.display.symbol.clear();
        let (errors, warnings) = check_config(&config);
        assert!(errors.is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_bad_log_level_is_error() {
        let mut config = CliConfig::default();
        config.logging.level = "turbo_cart=loud".to_string();
        let (errors, _) = check_config(&config);
        assert!(errors.iter().any(|e| e.starts_with("logging.level")));
    }
}
