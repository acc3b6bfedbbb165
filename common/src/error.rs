//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Fid parse error
    #[error("Invalid fid '{value}': {reason}")]
    InvalidFid {
        /// Original identifier string
        value: String,
        /// Why parsing failed
        reason: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// ha ingestion error type
#[derive(Debug, Error)]
pub enum HaxError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Request body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Report entry does not have the expected shape
    #[error("Malformed service report at index {index}: {reason}")]
    MalformedReport {
        /// Position of the entry in the request array
        index: usize,
        /// Shape error description
        reason: String,
    },

    /// Service identifier could not be parsed
    #[error("Invalid service id at index {index}: {source}")]
    InvalidServiceId {
        /// Position of the entry in the request array
        index: usize,
        /// Underlying parse error
        #[source]
        source: CommonError,
    },

    /// Notification sink rejected the states
    #[error("Sink error: {0}")]
    Sink(String),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Timeout error
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HaxError {
    /// Returns a safe error message for external clients.
    ///
    /// The `Display` implementation includes the offending payload fragments and
    /// downstream addresses, so it is only written to server logs.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Common(_) => "Request error",
            Self::Decode(_) => "Invalid JSON object received",
            Self::MalformedReport { .. } => "Malformed service report",
            Self::InvalidServiceId { .. } => "Invalid service id",
            Self::Sink(_) => "Notification sink error",
            Self::Http(_) => "Downstream service unavailable",
            Self::Timeout(_) => "Downstream timeout",
            Self::Internal(_) => "Internal server error",
        }
    }

    /// Position of the failing report entry, if the error is entry-scoped.
    pub fn entry_index(&self) -> Option<usize> {
        match self {
            Self::MalformedReport { index, .. } | Self::InvalidServiceId { index, .. } => {
                Some(*index)
            }
            _ => None,
        }
    }
}

/// ha ingestion Result type alias
pub type HaxResult<T> = Result<T, HaxError>;
