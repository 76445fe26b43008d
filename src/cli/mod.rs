//! Command-line interface for the product catalog service.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Product catalog HTTP service
#[derive(Parser)]
#[command(name = "product-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (default: search ./config.toml and the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Create default config file
    Init,
}

impl Cli {
    #[must_use]
    pub fn command_or_default(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }
}
