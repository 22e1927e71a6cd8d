use thiserror::Error;

#[derive(Error, Debug)]
pub enum KnotError {
    #[error("Request to {url} timed out after {timeout_seconds}s")]
    Timeout { url: String, timeout_seconds: u64 },

    #[error("Backend responded with HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Request to {url} was cancelled")]
    Cancelled { url: String },

    #[error("No screen is registered for path '{path}'")]
    NotFound { path: String },

    #[error("Response body could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Backend,
    Routing,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KnotError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KnotError::Timeout { .. } | KnotError::Transport(_) | KnotError::Cancelled { .. } => {
                ErrorCategory::Network
            }
            KnotError::HttpStatus { .. } => ErrorCategory::Backend,
            KnotError::NotFound { .. } => ErrorCategory::Routing,
            KnotError::Decode(_) | KnotError::SerializationError(_) => ErrorCategory::Data,
            KnotError::IoError(_)
            | KnotError::ConfigError { .. }
            | KnotError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KnotError::Cancelled { .. } | KnotError::NotFound { .. } => ErrorSeverity::Low,
            KnotError::Timeout { .. } | KnotError::Transport(_) => ErrorSeverity::Medium,
            KnotError::HttpStatus { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            KnotError::HttpStatus { .. } | KnotError::Decode(_) => ErrorSeverity::High,
            KnotError::SerializationError(_) => ErrorSeverity::High,
            KnotError::IoError(_)
            | KnotError::ConfigError { .. }
            | KnotError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Whether a caller could reasonably try the same request again.
    /// This layer never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            KnotError::Timeout { .. } | KnotError::Transport(_) => true,
            KnotError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KnotError::Timeout { .. } => {
                "The backend is slow to answer; retry later or raise timeout_seconds"
            }
            KnotError::HttpStatus { status, .. } if *status >= 500 => {
                "The analytics backend failed; check its logs and retry"
            }
            KnotError::HttpStatus { status: 404, .. } => {
                "Check that the requested identifier exists"
            }
            KnotError::HttpStatus { .. } => "Check the request parameters",
            KnotError::Transport(_) => "Check that the backend is running and base_url is correct",
            KnotError::Cancelled { .. } => "The request was superseded; no action needed",
            KnotError::NotFound { .. } => "Use one of the registered screen paths",
            KnotError::Decode(_) | KnotError::SerializationError(_) => {
                "The backend returned an unexpected payload; check API versions"
            }
            KnotError::IoError(_) => "Check that the configuration file exists and is readable",
            KnotError::ConfigError { .. } | KnotError::InvalidConfigValueError { .. } => {
                "Fix the configuration and try again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KnotError::Timeout { timeout_seconds, .. } => {
                format!("The request did not finish within {}s", timeout_seconds)
            }
            KnotError::HttpStatus { status, .. } => {
                format!("The backend rejected the request (HTTP {})", status)
            }
            KnotError::Transport(_) => "Could not reach the backend".to_string(),
            KnotError::Cancelled { .. } => "The request was cancelled".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KnotError>;
