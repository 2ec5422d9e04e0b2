//! Segment-boundary scan for labeled fields

use pagesplit_domain::{ExtractedFields, FieldLabel};

/// Extract the value of `label` from `content`.
///
/// Finds the first case-sensitive occurrence of `"<label>:"`, skips the
/// whitespace after the colon, and captures everything up to the next
/// blank-line-separated known label (`"\n\nid:"`, `"\n\nquestion:"`,
/// `"\n\nanswer:"`) or the end of the text. The capture may span lines and is
/// trimmed before it is returned.
///
/// Returns `None` when the label does not occur or when nothing but
/// whitespace follows it.
///
/// Occurrences are plain substring matches, so `"id:"` also matches inside
/// `"paid:"`, and a label quoted inside another field's value is taken at
/// face value.
pub fn extract_field(content: &str, label: &str) -> Option<String> {
    let marker = format!("{}:", label);
    let after_marker = content.find(&marker)? + marker.len();

    let rest = &content[after_marker..];
    let value = rest.trim_start();
    let first = value.chars().next()?;

    // The first value character is never part of a boundary.
    let end = next_boundary(value, first.len_utf8());
    let extracted = value[..end].trim();

    if extracted.is_empty() {
        None
    } else {
        Some(extracted.to_string())
    }
}

/// Typed form of [`extract_field`]
pub fn extract(content: &str, label: FieldLabel) -> Option<String> {
    extract_field(content, label.as_str())
}

/// Run the scan for every known label
pub fn extract_all(content: &str) -> ExtractedFields {
    let mut fields = ExtractedFields::default();
    for label in FieldLabel::ALL {
        if let Some(value) = extract(content, label) {
            fields.set(label, value);
        }
    }
    fields
}

/// Byte offset of the earliest `"\n\n<label>:"` at or after `from`, or the
/// end of `value`.
fn next_boundary(value: &str, from: usize) -> usize {
    let window = &value[from..];
    FieldLabel::ALL
        .iter()
        .filter_map(|label| window.find(&format!("\n\n{}:", label.as_str())))
        .min()
        .map_or(value.len(), |pos| from + pos)
}
