//! Error types for the extractor
//!
//! The `Display` text of each variant is the exact message sent back to the
//! caller, so changing one changes the wire contract.

use thiserror::Error;

/// Whole-request failures, raised before any record is processed
#[derive(Error, Debug)]
pub enum RequestError {
    /// Body is absent, blank, or decodes to an empty JSON value
    #[error("Request body is required")]
    EmptyBody,

    /// Body is not valid JSON
    #[error("Invalid JSON in request body")]
    InvalidJson(#[source] serde_json::Error),

    /// Body has no non-empty `values` array
    #[error("Invalid request format. Expected \"values\" array in request body.")]
    InvalidFormat,
}

/// Per-record failures, reported in that record's `errors` list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The batch entry is not a JSON object
    #[error("record must be a JSON object")]
    NotAnObject,

    /// `data` is present but is not a JSON object
    #[error("data field must be a JSON object")]
    InvalidData,

    /// `page_content` is absent, null or empty
    #[error("page_content field is required")]
    MissingPageContent,

    /// `page_content` is present but is not a string
    #[error("page_content field must be a string")]
    InvalidPageContent,

    /// `page_content` exceeds the configured maximum
    #[error("page_content exceeds maximum length: {0} chars (max: {1})")]
    ContentTooLong(usize, usize),
}
