use serde_json::Value;

/// A line whose text is a complete JSON object or array.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredPayload(Value);

impl StructuredPayload {
    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }

    /// Multi-line indented rendering of the payload.
    pub fn to_pretty_string(&self) -> String {
        // Serializing an already-parsed Value cannot fail.
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// Detect whether `text` is a self-contained structured payload.
///
/// Only object and array roots count; primitives and parse failures are
/// reported as "not structured", never as errors.
pub fn sniff(text: &str) -> Option<StructuredPayload> {
    let trimmed = text.trim();

    if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Some(StructuredPayload(value)),
        _ => None,
    }
}
