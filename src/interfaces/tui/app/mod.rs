//! App state and operations
//!
//! - state: core `App` struct and screen enum
//! - navigation: cursor movement and scrolling
//! - list_operations: taps, shuffles and action dispatch

mod list_operations;
mod navigation;
mod state;

pub use state::{App, CurrentScreen, ScreenLayout};
