//! Mode routing
//!
//! - Run mode: the interactive list screen
//! - Config mode: configuration helpers
//!
//! The mode is selected by the command-line subcommand.

pub mod config;
#[cfg(feature = "tui")]
pub mod tui;

pub use config::generate_config;
#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::{Commands, ConfigCommands};

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    Run,
    GenerateConfig { output: Option<String> },
}

/// Detect which mode to run based on the parsed command
pub fn detect_mode(command: &Commands) -> Mode {
    match command {
        Commands::Run => Mode::Run,
        Commands::Config {
            action: ConfigCommands::Generate { output },
        } => Mode::GenerateConfig {
            output: output.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_mode() {
        assert_eq!(detect_mode(&Commands::Run), Mode::Run);
        let command = Commands::Config {
            action: ConfigCommands::Generate { output: None },
        };
        assert_eq!(detect_mode(&command), Mode::GenerateConfig { output: None });
    }
}
