//! Process command implementation.

use super::read_input;
use crate::cli::ProcessArgs;
use crate::error::{CliError, Result};
use pagesplit_extractor::{decode_request, BatchProcessor, ExtractorConfig};
use std::fs;
use tracing::info;

/// Execute the process command, returning the encoded response envelope.
pub fn execute_process(args: &ProcessArgs) -> Result<String> {
    let config = match &args.config {
        Some(path) => ExtractorConfig::from_toml(&fs::read_to_string(path)?)
            .map_err(CliError::Config)?,
        None => ExtractorConfig::default(),
    };

    let body = read_input(&args.input)?;
    let request = decode_request(body.as_bytes())?;

    let response = BatchProcessor::new(config).process_request(&request);
    info!(
        "Processed {} records ({} failed, {} with warnings)",
        response.values.len(),
        response.failure_count(),
        response.warning_count()
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };

    Ok(output)
}
