//! Error types for ghload
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Paginated calls wrap it in [`crate::pagination::Partial`] so the items
//! fetched before a failure are not lost.

use thiserror::Error;

/// The main error type for ghload
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} ({body})")]
    HttpStatus {
        /// Numeric status code
        code: u16,
        /// Status line, e.g. `404 Not Found`
        status: String,
        /// At most [`crate::http::MAX_ERROR_BODY`] bytes of the response body
        body: String,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Stopped after {max_pages} page(s) with more pages remaining")]
    PageLimitExceeded { max_pages: usize },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(code: u16, status: impl Into<String>, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            code,
            status: status.into(),
            body: body.into(),
        }
    }

    /// Status code of an [`Error::HttpStatus`], if this is one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { code, .. } => Some(*code),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error came from decoding a response body
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}

/// Result type alias for ghload
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("missing api_url");
        assert_eq!(err.to_string(), "Configuration error: missing api_url");

        let err = Error::http_status(404, "404 Not Found", r#"{"message":"Not Found"}"#);
        assert_eq!(
            err.to_string(),
            r#"HTTP 404 Not Found ({"message":"Not Found"})"#
        );

        let err = Error::PageLimitExceeded { max_pages: 3 };
        assert_eq!(
            err.to_string(),
            "Stopped after 3 page(s) with more pages remaining"
        );
    }

    #[test]
    fn test_status_code() {
        assert_eq!(Error::http_status(502, "502 Bad Gateway", "").status_code(), Some(502));
        assert_eq!(Error::config("x").status_code(), None);
    }

    #[test]
    fn test_decode_error_is_verbatim() {
        let inner = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let message = inner.to_string();
        let err = Error::from(inner);
        assert!(err.is_decode());
        assert_eq!(err.to_string(), format!("Failed to decode response: {message}"));
    }
}
