//! pagesplit Extractor
//!
//! Splits `page_content` text blobs into `id`, `question` and `answer` fields
//! and assembles the batch response expected by the indexing pipeline.
//!
//! # Architecture
//!
//! ```text
//! body → SkillRequest → BatchProcessor → (per record) extract_field × 3 → SkillResponse
//! ```
//!
//! - **Envelope decoding** rejects a malformed request as a whole
//!   ([`RequestError`]).
//! - **Batch processing** never fails: each record yields exactly one output
//!   record, either with extracted data and warnings or with a single
//!   [`RecordError`] message.
//! - **Field extraction** is a pure segment-boundary scan.
//!
//! # Example Usage
//!
//! ```
//! use pagesplit_extractor::{decode_request, BatchProcessor};
//!
//! let body = br#"{"values":[{"recordId":"r1","data":{"page_content":"question: Q?\n\nanswer: A"}}]}"#;
//! let request = decode_request(body).unwrap();
//! let response = BatchProcessor::default().process_request(&request);
//!
//! assert_eq!(response.values.len(), 1);
//! assert_eq!(response.values[0].data().question.as_deref(), Some("Q?"));
//! ```

#![warn(missing_docs)]

mod batch;
mod config;
mod envelope;
mod error;
mod field;

#[cfg(test)]
mod tests;

pub use batch::{resolve_record_id, BatchProcessor};
pub use config::ExtractorConfig;
pub use envelope::{decode_request, SkillRequest};
pub use error::{RecordError, RequestError};
pub use field::{extract, extract_all, extract_field};
