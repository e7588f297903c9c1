//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// table-shuffle - a list screen with selection and shuffling
#[derive(Parser, Debug)]
#[command(name = "table-shuffle")]
#[command(version)]
#[command(about = "Interactive list with move-to-front selection and shuffle", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Seed for reproducible shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Open the list screen (default)
    Run,

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Print or write a sample config.toml
    Generate {
        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<String>,
    },
}

impl Cli {
    /// The command to run, defaulting to `run`
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Run)
    }
}
