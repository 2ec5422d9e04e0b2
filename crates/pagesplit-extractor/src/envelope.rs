//! Request envelope decoding

use crate::error::RequestError;
use serde_json::Value;

/// Decoded request envelope.
///
/// Records stay as raw JSON so a malformed entry becomes a record-level
/// failure instead of rejecting the whole batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRequest {
    /// Batch entries, in request order (never empty)
    pub values: Vec<Value>,
}

impl SkillRequest {
    /// Decode a raw request body
    pub fn from_slice(body: &[u8]) -> Result<Self, RequestError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(RequestError::EmptyBody);
        }

        let json: Value = serde_json::from_slice(body).map_err(RequestError::InvalidJson)?;
        if is_empty_value(&json) {
            return Err(RequestError::EmptyBody);
        }

        let Value::Object(mut envelope) = json else {
            return Err(RequestError::InvalidFormat);
        };

        match envelope.remove("values") {
            Some(Value::Array(values)) if !values.is_empty() => Ok(Self { values }),
            _ => Err(RequestError::InvalidFormat),
        }
    }

    /// Number of records in the batch
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a decoded request
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Decode a raw request body into its batch entries
pub fn decode_request(body: &[u8]) -> Result<SkillRequest, RequestError> {
    SkillRequest::from_slice(body)
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` count as "no body"
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
