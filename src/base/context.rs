//! Ergonomic error context helpers.
//!
//! Converts IO errors into context-rich `CaptureError` variants.

use crate::base::error::CaptureError;
use std::io;
use std::path::Path;

/// Extension trait for adding context to IO Results.
pub trait IoResultExt<T> {
    /// Attach the download target to an IO error.
    ///
    /// # Example
    /// ```ignore
    /// use netlog::base::context::IoResultExt;
    ///
    /// std::fs::write(&path, text).download_context(&path)?;
    /// // Error: "Download to ./netlog_1700000000000.txt failed: permission denied"
    /// ```
    fn download_context(self, path: &Path) -> Result<T, CaptureError>;

    /// Attach the configuration file path to an IO error.
    fn config_context(self, path: &Path) -> Result<T, CaptureError>;

    /// Attach the HAR file path to an IO error.
    fn har_context(self, path: &Path) -> Result<T, CaptureError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn download_context(self, path: &Path) -> Result<T, CaptureError> {
        self.map_err(|e| CaptureError::DownloadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn config_context(self, path: &Path) -> Result<T, CaptureError> {
        self.map_err(|e| CaptureError::config(format!("{}: {}", path.display(), e)))
    }

    fn har_context(self, path: &Path) -> Result<T, CaptureError> {
        self.map_err(|e| CaptureError::invalid_har(format!("{}: {}", path.display(), e)))
    }
}
