//! User interfaces

pub mod tui;
