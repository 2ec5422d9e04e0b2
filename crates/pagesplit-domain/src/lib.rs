//! pagesplit Domain Layer
//!
//! Data model shared by the extractor, the HTTP server and the CLI.
//!
//! ## Key Concepts
//!
//! - **Field label**: one of `id`, `question`, `answer`, the segment markers
//!   recognised inside a `page_content` text blob
//! - **Output record**: per-record result carrying extracted fields plus
//!   error and warning lists
//! - **Skill response**: the batch envelope returned to the indexing pipeline
//!
//! The only external dependency is `serde`, since these types *are* the wire
//! format of the custom skill envelope.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod label;
pub mod record;

// Re-exports for convenience
pub use label::FieldLabel;
pub use record::{ExtractedFields, OutputRecord, SkillMessage, SkillResponse};
