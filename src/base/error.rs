use thiserror::Error;

/// Failures produced by the capture, export and panel layers.
///
/// Only [`CaptureError::NoMatchingRequests`], [`CaptureError::ClipboardWriteFailed`]
/// and the I/O style variants reach the user. Filter and body-fetch failures are
/// absorbed where they happen and replaced by a fallback.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CaptureError {
    #[error("Invalid filter pattern `{pattern}`: {reason}")]
    InvalidFilterPattern { pattern: String, reason: String },

    #[error("Body fetch failed: {message}")]
    BodyFetchFailed { message: String },

    #[error("No requests match the current filter")]
    NoMatchingRequests,

    #[error("Clipboard write failed")]
    ClipboardWriteFailed,

    #[error("Download to {path} failed: {message}")]
    DownloadFailed { path: String, message: String },

    #[error("Invalid HAR data: {message}")]
    InvalidHar { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CaptureError {
    pub fn body_fetch_failed(message: impl Into<String>) -> Self {
        CaptureError::BodyFetchFailed {
            message: message.into(),
        }
    }

    pub fn invalid_har(message: impl Into<String>) -> Self {
        CaptureError::InvalidHar {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        CaptureError::Config {
            message: message.into(),
        }
    }

    /// Whether the failure is handled locally with a fallback instead of being
    /// shown to the user.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CaptureError::InvalidFilterPattern { .. } | CaptureError::BodyFetchFailed { .. }
        )
    }
}

impl From<serde_json::Error> for CaptureError {
    fn from(err: serde_json::Error) -> Self {
        CaptureError::invalid_har(err.to_string())
    }
}
