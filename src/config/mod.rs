//! Configuration
//!
//! Static configuration loaded once at startup from `config.toml` and
//! `TS__*` environment variables.

mod structs;
pub mod validators;

pub use structs::*;
