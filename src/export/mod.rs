//! Export of the filtered capture log.
//!
//! Every visible exchange becomes one entry: its cURL command, a blank line,
//! `Response :` and the body text. Entries are joined by a separator line of
//! `=` characters and the document ends with one more separator.
//!
//! Bodies are fetched one at a time, in capture order, so the document is the
//! same on every run for the same log and the host is never flooded.

pub mod sink;

use crate::base::error::CaptureError;
use crate::capture::store::{CaptureStore, CapturedExchange};
use crate::curl::synthesize;
use std::sync::Arc;
use time::OffsetDateTime;

pub use sink::{ClipboardSink, CopyFeedback, DirectoryDownloadSink, DownloadSink};

/// Width of the separator line.
pub const SEPARATOR_WIDTH: usize = 90;

/// Body placeholder when the host had nothing.
pub const NO_CONTENT: &str = "(No content)";

/// Body placeholder when the fetch itself failed.
pub const FETCH_ERROR: &str = "(Error getting content)";

/// Separator between entries, framed by blank lines.
pub fn separator(width: usize) -> String {
    format!("\n\n{}\n", "=".repeat(width))
}

/// One document entry.
pub fn format_entry(curl: &str, body: &str) -> String {
    format!("{}\n\nResponse :\n{}", curl, body)
}

/// Suggested download filename, `<prefix>_<epoch-ms>.txt`.
pub fn download_filename(prefix: &str, at: OffsetDateTime) -> String {
    let millis = at.unix_timestamp_nanos() / 1_000_000;
    format!("{}_{}.txt", prefix, millis)
}

/// Fetch a body for the export document, absorbing failures.
pub async fn body_text(exchange: &CapturedExchange) -> String {
    match exchange.fetch_body().await {
        Ok(Some(text)) if !text.is_empty() => text,
        Ok(_) => NO_CONTENT.to_string(),
        Err(e) => {
            tracing::warn!(id = %exchange.id(), error = %e, "body fetch failed during export");
            FETCH_ERROR.to_string()
        }
    }
}

/// Build the export document for the given entries.
pub async fn export_entries(
    entries: &[Arc<CapturedExchange>],
    separator_width: usize,
) -> Result<String, CaptureError> {
    if entries.is_empty() {
        return Err(CaptureError::NoMatchingRequests);
    }

    let separator = separator(separator_width);
    let mut document = String::new();

    for exchange in entries {
        let curl = synthesize(exchange.record());
        let body = body_text(exchange).await;
        document.push_str(&format_entry(&curl, &body));
        document.push_str(&separator);
    }

    tracing::info!(entries = entries.len(), bytes = document.len(), "built export document");
    Ok(document)
}

/// Build the export document for every exchange matching `pattern`.
pub async fn export_log(store: &CaptureStore, pattern: &str) -> Result<String, CaptureError> {
    export_entries(&store.visible(pattern), SEPARATOR_WIDTH).await
}
