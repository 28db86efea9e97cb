//! Pagenav command-line interface.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Command, CommandContext};
pub use error::CliError;
