use serde::{Deserialize, Serialize};

/// Error body some backend routes return instead of plain text.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message
    pub message: String,
    /// Optional additional details about the error
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Extracts a human readable message from a raw response body.
    ///
    /// JSON bodies with a `message` field yield that field, other non-empty
    /// bodies are returned verbatim, and blank bodies yield `None`.
    pub fn message_from_body(body: &str) -> Option<String> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return None;
        }
        match serde_json::from_str::<Self>(trimmed) {
            Ok(parsed) => Some(parsed.to_string()),
            Err(_) => Some(trimmed.trim_matches('"').to_string()),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}
