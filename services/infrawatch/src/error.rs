//! Error types for the dashboard host

/// Errors that can occur while configuring or running the host
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for host operations
pub type Result<T> = std::result::Result<T, HostError>;
