//! Batch orchestration: one output record per input record

use crate::config::ExtractorConfig;
use crate::envelope::{is_empty_value, SkillRequest};
use crate::error::RecordError;
use crate::field::extract_all;
use pagesplit_domain::{FieldLabel, OutputRecord, SkillMessage, SkillResponse};
use serde_json::Value;
use tracing::{debug, warn};

/// Turns a batch of raw records into output records.
///
/// Holds only immutable configuration, so one processor can be shared across
/// requests.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    config: ExtractorConfig,
}

impl BatchProcessor {
    /// Create a processor with the given configuration
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Process every record of a decoded request, preserving order
    pub fn process_request(&self, request: &SkillRequest) -> SkillResponse {
        self.process_batch(&request.values)
    }

    /// Process a slice of raw records, preserving order.
    ///
    /// Never fails: a record that cannot be processed yields a failure record
    /// at its own index.
    pub fn process_batch(&self, records: &[Value]) -> SkillResponse {
        let values = records
            .iter()
            .enumerate()
            .map(|(index, record)| self.process_record(record, index))
            .collect();

        SkillResponse { values }
    }

    /// Process one raw record found at `index` in its batch
    pub fn process_record(&self, record: &Value, index: usize) -> OutputRecord {
        let record_id = resolve_record_id(record, index);

        let content = match self.page_content(record) {
            Ok(content) => content,
            Err(e) => {
                warn!("Record {} ({}) failed: {}", index, record_id, e);
                return OutputRecord::failure(record_id, e.to_string());
            }
        };

        let data = extract_all(content);
        let warnings: Vec<SkillMessage> = FieldLabel::ALL
            .iter()
            .filter(|label| label.is_required() && data.get(**label).is_none())
            .map(|label| SkillMessage::new(label.missing_message()))
            .collect();

        debug!(
            "Record {} ({}): {} fields extracted, {} warnings",
            index,
            record_id,
            data.len(),
            warnings.len()
        );

        OutputRecord::success(record_id, data, warnings)
    }

    /// Locate `data.page_content` and check it against the configuration.
    ///
    /// An empty JSON value (`null`, `""`, `false`, `0`, `[]`, `{}`) counts as
    /// a missing `page_content`.
    fn page_content<'a>(&self, record: &'a Value) -> Result<&'a str, RecordError> {
        let record = record.as_object().ok_or(RecordError::NotAnObject)?;

        let data = match record.get("data") {
            None | Some(Value::Null) => return Err(RecordError::MissingPageContent),
            Some(Value::Object(data)) => data,
            Some(_) => return Err(RecordError::InvalidData),
        };

        let content = match data.get("page_content") {
            None => return Err(RecordError::MissingPageContent),
            Some(value) if is_empty_value(value) => return Err(RecordError::MissingPageContent),
            Some(Value::String(content)) => content.as_str(),
            Some(_) => return Err(RecordError::InvalidPageContent),
        };

        if let Some(max) = self.config.max_content_length {
            let length = content.chars().count();
            if length > max {
                return Err(RecordError::ContentTooLong(length, max));
            }
        }

        Ok(content)
    }
}

/// Identifier for the record at `index`.
///
/// Uses `recordId` when it is a non-empty string (or a number, rendered as
/// text); anything else falls back to `record_<index>`.
pub fn resolve_record_id(record: &Value, index: usize) -> String {
    match record.get("recordId") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => format!("record_{}", index),
    }
}
