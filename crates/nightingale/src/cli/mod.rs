//! Command-line interface module.
//!
//! Provides the CLI structure and command handlers for the nightingale
//! binary.

mod commands;
mod tui_handler;

pub use commands::{Cli, Commands};
pub use tui_handler::{launch_chat, launch_plan};
