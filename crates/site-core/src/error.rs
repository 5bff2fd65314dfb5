//! Error Types

use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Site error types
#[derive(Error, Debug)]
pub enum SiteError {
    /// Durable client storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// The submission request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The submission endpoint answered with a non-success status
    #[error("Submission rejected with HTTP status {0}")]
    Status(u16),

    /// Analytics sink refused the event
    #[error("Analytics error: {0}")]
    Analytics(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = SiteError::Status(404);
        assert_eq!(err.to_string(), "Submission rejected with HTTP status 404");
    }

    #[test]
    fn test_json_conversion() {
        let err: SiteError = serde_json::from_str::<u8>("nope").unwrap_err().into();
        assert!(matches!(err, SiteError::Json(_)));
    }
}
