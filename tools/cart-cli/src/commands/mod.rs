//! CLI command implementations.

pub mod config;
pub mod shell;
pub mod summary;

use clap::{Args, Subcommand};

/// Arguments for the summary command.
#[derive(Args)]
pub struct SummaryArgs {
    /// JSON file with the cart items ("-" for stdin).
    pub items: String,

    /// Apply the flat discount.
    #[arg(short, long)]
    pub discount: bool,

    /// Reject invalid prices and items whose duplicates disagree on price.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the shell command.
#[derive(Args)]
pub struct ShellArgs {
    /// JSON file with the cart items.
    pub items: String,

    /// Skip the confirmation when emptying the cart.
    #[arg(short, long)]
    pub yes: bool,
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
    /// Validate the config file.
    Validate,
}
