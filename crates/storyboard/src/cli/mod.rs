//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyboard binary.

mod chat;
mod commands;
mod generate;
mod ratios;

pub use chat::run_chat;
pub use commands::{Cli, Commands};
pub use generate::{ScriptSource, run_generate};
pub use ratios::list_aspect_ratios;
