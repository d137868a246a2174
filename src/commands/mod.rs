//! Command implementations for strut.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod new;
mod templates;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::New(args) => new::cmd_new(args),
        Command::Templates(args) => templates::cmd_templates(args),
    }
}
