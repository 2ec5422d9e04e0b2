//! pagesplit CLI library.
//!
//! Runs the custom skill offline: a request envelope from a file or stdin
//! goes through the same batch processor the HTTP server uses.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
