//! Parlor CLI library
//!
//! Command-line tooling for the Parlor chatbot service: offline action
//! extraction, one-shot chat, an interactive session, and lead listings.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, CliFormat, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
