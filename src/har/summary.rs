//! One-line summaries of captured exchanges for the request list.

use crate::capture::store::{CapturedExchange, ExchangeId};
use crate::har::record::ExchangeRecord;
use url::Url;

/// Length of the fallback name when a URL does not parse.
const FALLBACK_NAME_LEN: usize = 30;

const SIZE_UNITS: [&str; 3] = ["B", "KB", "MB"];

/// Row shown in the request list.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestRow {
    pub id: ExchangeId,
    pub status: i64,
    pub method: String,
    /// Short name: the last path segment.
    pub name: String,
    /// Full URL, shown as the name's tooltip.
    pub url: String,
    /// MIME subtype, e.g. `json`.
    pub kind: String,
    pub size: String,
    pub time: String,
}

impl RequestRow {
    pub fn new(id: ExchangeId, record: &ExchangeRecord) -> Self {
        Self {
            id,
            status: record.response.status,
            method: record.request.method.clone(),
            name: display_name(&record.request.url),
            url: record.request.url.clone(),
            kind: mime_subtype(record.response.content.mime_type.as_deref()),
            size: format_bytes(record.response.body_size),
            time: format!("{}ms", record.timing_ms().round() as i64),
        }
    }

    pub fn from_exchange(exchange: &CapturedExchange) -> Self {
        Self::new(exchange.id(), exchange.record())
    }

    /// Error styling applies to 4xx and 5xx responses.
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// Last path segment of `url`, or the whole URL when that segment is empty.
pub fn display_name(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match parsed.path().rsplit('/').next() {
            Some(segment) if !segment.is_empty() => segment.to_string(),
            _ => url.to_string(),
        },
        Err(_) => url.chars().take(FALLBACK_NAME_LEN).collect(),
    }
}

/// `-` without a MIME type, `?` when it has no subtype.
pub fn mime_subtype(mime_type: Option<&str>) -> String {
    match mime_type {
        None | Some("") => "-".to_string(),
        Some(mime) => match mime.split('/').nth(1) {
            Some(sub) if !sub.is_empty() => sub.to_string(),
            _ => "?".to_string(),
        },
    }
}

/// Human readable size in 1024-based units with at most one decimal.
pub fn format_bytes(bytes: Option<i64>) -> String {
    let bytes = match bytes {
        Some(0) => return "0 B".to_string(),
        Some(b) if b > 0 => b as f64,
        _ => return "-".to_string(),
    };

    let exponent = ((bytes.ln() / 1024f64.ln()).floor() as usize).min(SIZE_UNITS.len() - 1);
    let scaled = bytes / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 10.0).round() / 10.0;
    format!("{} {}", rounded, SIZE_UNITS[exponent])
}
