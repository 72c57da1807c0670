//! HAR document parsing.
//!
//! Accepts either a full archive (`{"log": {"entries": [...]}}`) or a single
//! entry object, which is the shape hosts hand over per finished request.

use crate::base::context::IoResultExt;
use crate::base::error::CaptureError;
use crate::har::record::{lenient, ExchangeRecord};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct HarDocument {
    log: HarLog,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HarLog {
    #[serde(deserialize_with = "lenient")]
    entries: Vec<Value>,
}

/// Parse one HAR entry.
pub fn parse_har_entry(json: &str) -> Result<ExchangeRecord, CaptureError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a HAR document into its entries, in archive order.
///
/// Entries that are not objects are skipped; the rest of the archive still
/// loads.
pub fn parse_har_log(json: &str) -> Result<Vec<ExchangeRecord>, CaptureError> {
    let document: HarDocument = serde_json::from_str(json)?;
    let total = document.log.entries.len();

    let entries: Vec<ExchangeRecord> = document
        .log
        .entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed HAR entry");
                None
            }
        })
        .collect();

    tracing::debug!(
        entries = entries.len(),
        skipped = total - entries.len(),
        "parsed HAR document"
    );
    Ok(entries)
}

/// Read and parse a HAR file from disk.
pub fn load_har_file(path: &Path) -> Result<Vec<ExchangeRecord>, CaptureError> {
    let json = fs::read_to_string(path).har_context(path)?;
    parse_har_log(&json)
}

/// Write records back out as a minimal HAR document.
pub fn save_har_file(path: &Path, records: &[ExchangeRecord]) -> Result<(), CaptureError> {
    let document = serde_json::json!({
        "log": {
            "version": "1.2",
            "creator": { "name": env!("CARGO_PKG_NAME"), "version": env!("CARGO_PKG_VERSION") },
            "entries": records,
        }
    });
    let json = serde_json::to_string_pretty(&document)?;
    fs::write(path, json).download_context(path)
}
