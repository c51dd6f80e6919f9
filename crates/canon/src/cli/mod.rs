//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the canon binary.

mod commands;
mod continuity;
mod convert;
mod validate;

pub use commands::{Cli, Commands, OutputFormat};
pub use continuity::handle_continuity_command;
pub use convert::handle_convert_command;
pub use validate::{handle_validate_command, handle_validate_markdown_command};
