//! Analyzer error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// Rejected by the service; the message is shown to the user as is
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Missing API key: set the {var} environment variable")]
    MissingApiKey { var: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AnalyzeError {
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn missing_api_key(var: impl Into<String>) -> Self {
        Self::MissingApiKey { var: var.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether sending the same request again may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { .. } => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for AnalyzeError {
    fn from(err: reqwest::Error) -> Self {
        Self::http(err.to_string())
    }
}

impl From<serde_json::Error> for AnalyzeError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_only() {
        let err = AnalyzeError::api(400, "prompt is too long");
        assert_eq!(err.to_string(), "prompt is too long");
    }

    #[test]
    fn test_retryable() {
        assert!(AnalyzeError::http("connection reset").is_retryable());
        assert!(AnalyzeError::api(529, "overloaded").is_retryable());
        assert!(AnalyzeError::api(429, "rate limited").is_retryable());
        assert!(!AnalyzeError::api(401, "invalid x-api-key").is_retryable());
        assert!(!AnalyzeError::malformed("not json").is_retryable());
    }
}
