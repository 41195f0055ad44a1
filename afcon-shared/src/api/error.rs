use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single request against the ticketing API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS...).
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server responded with {status}")]
    Status {
        status: StatusCode,
        /// Text extracted from the response body, when there was one.
        message: Option<String>,
    },

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) | Self::Decode(err) => err.status(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// The server-provided message when present, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
