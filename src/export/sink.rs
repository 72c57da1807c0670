//! Destinations for exported text: the clipboard and file downloads.

use crate::base::context::IoResultExt;
use crate::base::error::CaptureError;
use std::fs;
use std::path::{Path, PathBuf};

/// Clipboard writer. Returns whether the write succeeded.
pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> bool;
}

impl<F> ClipboardSink for F
where
    F: Fn(&str) -> bool,
{
    fn write_text(&self, text: &str) -> bool {
        self(text)
    }
}

/// Receives a finished document under a suggested filename.
pub trait DownloadSink {
    fn save(&self, text: &str, suggested_filename: &str) -> Result<PathBuf, CaptureError>;
}

/// Writes downloads into a directory.
#[derive(Debug, Clone)]
pub struct DirectoryDownloadSink {
    dir: PathBuf,
}

impl DirectoryDownloadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectoryDownloadSink {
    fn save(&self, text: &str, suggested_filename: &str) -> Result<PathBuf, CaptureError> {
        let path = self.dir.join(suggested_filename);
        fs::write(&path, text).download_context(&path)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "saved download");
        Ok(path)
    }
}

/// Outcome of a copy action, shown briefly next to the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFeedback {
    Copied,
    Failed,
    /// The text was empty; the sink was not called.
    NothingToCopy,
}

impl CopyFeedback {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            CopyFeedback::Copied => Some("Copied!"),
            CopyFeedback::Failed => Some("Failed"),
            CopyFeedback::NothingToCopy => None,
        }
    }
}

impl From<Result<(), CaptureError>> for CopyFeedback {
    fn from(result: Result<(), CaptureError>) -> Self {
        match result {
            Ok(()) => CopyFeedback::Copied,
            Err(_) => CopyFeedback::Failed,
        }
    }
}

/// Send `text` to the clipboard. Empty text is not written.
pub fn copy_text(sink: &dyn ClipboardSink, text: &str) -> CopyFeedback {
    if text.is_empty() {
        tracing::debug!("nothing to copy");
        return CopyFeedback::NothingToCopy;
    }
    write_clipboard(sink, text).into()
}

fn write_clipboard(sink: &dyn ClipboardSink, text: &str) -> Result<(), CaptureError> {
    if sink.write_text(text) {
        Ok(())
    } else {
        tracing::warn!(bytes = text.len(), "clipboard write failed");
        Err(CaptureError::ClipboardWriteFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_copy_text_outcomes() {
        let written = RefCell::new(Vec::new());
        let ok = |text: &str| {
            written.borrow_mut().push(text.to_string());
            true
        };
        assert_eq!(copy_text(&ok, "curl 'x'"), CopyFeedback::Copied);
        assert_eq!(copy_text(&ok, ""), CopyFeedback::NothingToCopy);
        assert_eq!(written.borrow().as_slice(), ["curl 'x'".to_string()]);

        let failing = |_: &str| false;
        assert_eq!(copy_text(&failing, "x"), CopyFeedback::Failed);
    }

    #[test]
    fn test_feedback_labels() {
        assert_eq!(CopyFeedback::Copied.label(), Some("Copied!"));
        assert_eq!(CopyFeedback::Failed.label(), Some("Failed"));
        assert_eq!(CopyFeedback::NothingToCopy.label(), None);
    }

    #[test]
    fn test_directory_download() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectoryDownloadSink::new(dir.path());

        let path = sink.save("hello", "netlog_1.txt").unwrap();
        assert_eq!(path, dir.path().join("netlog_1.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_directory_download_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectoryDownloadSink::new(dir.path().join("missing"));

        let err = sink.save("hello", "netlog_1.txt").unwrap_err();
        assert!(matches!(err, CaptureError::DownloadFailed { .. }));
    }
}
