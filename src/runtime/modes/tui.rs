//! TUI mode
//!
//! Starts the list screen with the loaded screen configuration.

use crate::errors::Result;
use crate::runtime::lifetime::startup::StartupContext;

/// Run TUI mode
pub fn run_tui(context: &StartupContext, seed: Option<u64>) -> Result<()> {
    crate::interfaces::tui::run_tui(&context.config.screen, seed)
}
