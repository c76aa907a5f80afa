//! Shared error type across svcprobe crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Configuration could not be parsed or failed validation.
    BadConfig,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// A measurement was negative or not finite.
    InvalidSample,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::InvalidSample => "INVALID_SAMPLE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SvcProbeError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum SvcProbeError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("invalid sample: {0}")]
    InvalidSample(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SvcProbeError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SvcProbeError::BadConfig(_) => ClientCode::BadConfig,
            SvcProbeError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            SvcProbeError::InvalidSample(_) => ClientCode::InvalidSample,
            SvcProbeError::Internal(_) => ClientCode::Internal,
        }
    }
}
