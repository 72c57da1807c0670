//! Panel configuration.

use crate::base::context::IoResultExt;
use crate::base::error::CaptureError;
use crate::export::SEPARATOR_WIDTH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration options for a [`NetlogPanel`](crate::panel::NetlogPanel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Number of `=` characters in the export separator line.
    pub separator_width: usize,

    /// Download filename prefix, followed by `_<epoch-ms>.txt`.
    pub filename_prefix: String,

    /// Directory used by the default download sink.
    pub download_dir: PathBuf,

    /// How long copy feedback stays visible.
    pub copy_feedback_ms: u64,

    /// Initial state of the preserve-log toggle.
    pub preserve_log: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            separator_width: SEPARATOR_WIDTH,
            filename_prefix: "netlog".to_string(),
            download_dir: PathBuf::from("."),
            copy_feedback_ms: 1500,
            preserve_log: false,
        }
    }
}

impl PanelConfig {
    pub fn from_json_str(json: &str) -> Result<Self, CaptureError> {
        serde_json::from_str(json).map_err(|e| CaptureError::config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, CaptureError> {
        let json = fs::read_to_string(path).config_context(path)?;
        Self::from_json_str(&json)
    }

    pub fn with_separator_width(mut self, width: usize) -> Self {
        self.separator_width = width;
        self
    }

    pub fn with_filename_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.filename_prefix = prefix.into();
        self
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    pub fn with_preserve_log(mut self, preserve: bool) -> Self {
        self.preserve_log = preserve;
        self
    }

    pub fn copy_feedback_duration(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}
