//! Field labels recognised inside a `page_content` blob

/// A labeled segment inside a text blob.
///
/// A segment is written as `<label>: <value>` and segments are separated by a
/// blank line:
///
/// ```text
/// id: 17
///
/// question: What is 2+2?
///
/// answer: 4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    /// Source-side identifier of the entry (optional)
    Id,

    /// Question text
    Question,

    /// Answer text
    Answer,
}

impl FieldLabel {
    /// Every known label, in extraction order.
    ///
    /// This set also defines the segment boundaries: a value ends where a
    /// blank line is followed by any of these labels.
    pub const ALL: [FieldLabel; 3] = [FieldLabel::Id, FieldLabel::Question, FieldLabel::Answer];

    /// Get the label name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldLabel::Id => "id",
            FieldLabel::Question => "question",
            FieldLabel::Answer => "answer",
        }
    }

    /// Parse a label from its name (case-sensitive, like the scan itself)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(FieldLabel::Id),
            "question" => Some(FieldLabel::Question),
            "answer" => Some(FieldLabel::Answer),
            _ => None,
        }
    }

    /// Whether a missing value for this label is reported as a warning.
    ///
    /// `id` is optional; `question` and `answer` are expected in every blob.
    pub fn is_required(&self) -> bool {
        !matches!(self, FieldLabel::Id)
    }

    /// Warning message emitted when a required label is missing
    pub fn missing_message(&self) -> String {
        format!("{} field not found in page_content", self.as_str())
    }
}

impl std::fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid field label: {}", s))
    }
}
