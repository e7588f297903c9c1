//! table-shuffle - an interactive list screen
//!
//! Shows a list of numbers, toggles a checkmark per row (moving newly
//! selected rows to the top) and shuffles the list on demand. Every change
//! is expressed as a snapshot diff that the terminal UI applies.
//!
//! # Features
//! - **tui**: Terminal user interface (default)
//!
//! # Architecture
//! - `list`: list screen controller, snapshots and diffing
//! - `interfaces`: user interfaces (TUI)
//! - `config`: configuration management
//! - `runtime`: application lifecycle and execution modes
//! - `system`: logging and panic handling

pub mod cli;
pub mod config;
pub mod errors;
#[cfg(feature = "tui")]
pub mod interfaces;
pub mod list;
pub mod runtime;
pub mod system;
