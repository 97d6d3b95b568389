//! API response wrappers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard success envelope: every successful endpoint returns its payload
/// under a `data` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebResponse<T> {
    pub data: T,
}

impl<T> WebResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Error payload surfaced to clients.
///
/// `errors` carries per-field validation messages and is omitted from the
/// JSON body when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,

    /// Field-specific errors, keyed by field name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ErrorResponse {
    /// Create an error response with a message only
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    /// Attach field-level errors
    pub fn with_field_errors(mut self, errors: HashMap<String, Vec<String>>) -> Self {
        self.errors = Some(errors);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_omits_empty_field_errors() {
        let json = serde_json::to_string(&ErrorResponse::new("boom")).unwrap();
        assert_eq!(json, r#"{"message":"boom"}"#);
    }

    #[test]
    fn error_response_serializes_field_errors() {
        let mut errors = HashMap::new();
        errors.insert("email".to_string(), vec!["invalid email".to_string()]);
        let response = ErrorResponse::new("validation failed").with_field_errors(errors);

        let value: serde_json::Value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["errors"]["email"][0], "invalid email");
    }

    #[test]
    fn web_response_wraps_payload_under_data() {
        let value = serde_json::to_value(WebResponse::new("ok")).unwrap();
        assert_eq!(value["data"], "ok");
    }
}
