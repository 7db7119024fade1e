//! Error types for backend API calls

/// Errors returned by the InfraWatch backend client
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request could not complete
    #[error("{0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// A 2xx body that was not the expected JSON
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the dashboard error banner
    ///
    /// The backend's own message is shown verbatim; a network failure shows
    /// the transport's description; everything else gets `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            ApiError::Network(message) if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type alias for backend calls
pub type Result<T> = std::result::Result<T, ApiError>;
