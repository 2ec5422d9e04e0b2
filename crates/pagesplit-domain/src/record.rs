//! Output records and the response envelope

use crate::label::FieldLabel;
use serde::Serialize;

/// A single error or warning attached to an output record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillMessage {
    /// Human-readable description
    pub message: String,
}

impl SkillMessage {
    /// Create a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Fields extracted from one `page_content` blob.
///
/// Only fields that were found are serialized; a missing field is an absent
/// key, never `null`. Keys always come out in `id`, `question`, `answer`
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    /// Value of the `id:` segment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Value of the `question:` segment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    /// Value of the `answer:` segment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl ExtractedFields {
    /// Value extracted for `label`, if any
    pub fn get(&self, label: FieldLabel) -> Option<&str> {
        match label {
            FieldLabel::Id => self.id.as_deref(),
            FieldLabel::Question => self.question.as_deref(),
            FieldLabel::Answer => self.answer.as_deref(),
        }
    }

    /// Store the value for `label`
    pub fn set(&mut self, label: FieldLabel, value: String) {
        let slot = match label {
            FieldLabel::Id => &mut self.id,
            FieldLabel::Question => &mut self.question,
            FieldLabel::Answer => &mut self.answer,
        };
        *slot = Some(value);
    }

    /// True when no field was extracted
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.question.is_none() && self.answer.is_none()
    }

    /// Number of extracted fields
    pub fn len(&self) -> usize {
        FieldLabel::ALL
            .iter()
            .filter(|label| self.get(**label).is_some())
            .count()
    }
}

/// Per-record result in the response envelope.
///
/// Built through [`OutputRecord::success`] or [`OutputRecord::failure`], which
/// keeps the two failure channels apart: a record either carries `errors`
/// (and nothing else) or `data` plus `warnings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "recordId")]
    record_id: String,
    data: ExtractedFields,
    errors: Vec<SkillMessage>,
    warnings: Vec<SkillMessage>,
}

impl OutputRecord {
    /// Record whose extraction ran; missing expected fields show up as warnings
    pub fn success(
        record_id: impl Into<String>,
        data: ExtractedFields,
        warnings: Vec<SkillMessage>,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            data,
            errors: Vec::new(),
            warnings,
        }
    }

    /// Hard failure: no data, no warnings, a single error
    pub fn failure(record_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            data: ExtractedFields::default(),
            errors: vec![SkillMessage::new(message)],
            warnings: Vec::new(),
        }
    }

    /// Identifier echoed back to the caller
    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// Extracted fields
    pub fn data(&self) -> &ExtractedFields {
        &self.data
    }

    /// Record-level errors
    pub fn errors(&self) -> &[SkillMessage] {
        &self.errors
    }

    /// Record-level warnings
    pub fn warnings(&self) -> &[SkillMessage] {
        &self.warnings
    }

    /// True when the record is a hard failure
    pub fn is_failure(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Response envelope: one output record per input record, same order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillResponse {
    /// Output records, index-aligned with the request's `values`
    pub values: Vec<OutputRecord>,
}

impl SkillResponse {
    /// Number of records that failed hard
    pub fn failure_count(&self) -> usize {
        self.values.iter().filter(|r| r.is_failure()).count()
    }

    /// Number of records that carry at least one warning
    pub fn warning_count(&self) -> usize {
        self.values.iter().filter(|r| !r.warnings().is_empty()).count()
    }
}
