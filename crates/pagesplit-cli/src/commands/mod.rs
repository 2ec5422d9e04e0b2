//! Command implementations.

mod extract;
mod process;

pub use extract::execute_extract;
pub use process::execute_process;

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use std::fs;
use std::io::{self, Read};

/// Read the whole input from file or stdin.
fn read_input(input: &InputArgs) -> Result<String> {
    if input.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(file_path) = &input.file {
        Ok(fs::read_to_string(file_path)?)
    } else {
        Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ))
    }
}
