//! Extract command implementation.

use super::read_input;
use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use pagesplit_domain::FieldLabel;

/// Execute the extract command, returning the field value.
pub fn execute_extract(args: &ExtractArgs) -> Result<String> {
    let label: FieldLabel = args.label.into();
    let content = read_input(&args.input)?;

    pagesplit_extractor::extract(&content, label).ok_or(CliError::FieldNotFound(label))
}
