//! Render models for the request list and the details pane.

use crate::base::error::CaptureError;
use crate::capture::store::CapturedExchange;
use crate::curl::synthesize;
use crate::export::NO_CONTENT;
use crate::har::summary::RequestRow;

pub const CURL_PLACEHOLDER: &str = "Select a request to view cURL...";
pub const RESPONSE_PLACEHOLDER: &str = "Select a request to view Response...";

/// Why the request list has no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing captured yet.
    Waiting,
    /// Captured entries exist but the filter hides all of them.
    NoMatches,
    /// The log was just cleared.
    Cleared,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::Waiting => "Waiting for network requests...",
            EmptyState::NoMatches => "No requests match filter.",
            EmptyState::Cleared => "Log Cleared. Waiting...",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Rows(Vec<RequestRow>),
    Empty(EmptyState),
}

impl ListView {
    pub fn rows(&self) -> &[RequestRow] {
        match self {
            ListView::Rows(rows) => rows,
            ListView::Empty(_) => &[],
        }
    }
}

/// Contents of the cURL and Response tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    pub curl: String,
    pub response: String,
}

impl Default for DetailsView {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl DetailsView {
    pub fn placeholder() -> Self {
        Self {
            curl: CURL_PLACEHOLDER.to_string(),
            response: RESPONSE_PLACEHOLDER.to_string(),
        }
    }

    /// Render the details for one exchange, fetching its body.
    pub async fn render(exchange: &CapturedExchange) -> Self {
        let curl = synthesize(exchange.record());
        let response = match exchange.fetch_body().await {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => NO_CONTENT.to_string(),
            Err(e) => {
                tracing::warn!(id = %exchange.id(), error = %e, "failed to load response body");
                format!("(Error loading content: {})", error_detail(&e))
            }
        };
        Self { curl, response }
    }

    pub fn is_placeholder(&self) -> bool {
        self.curl == CURL_PLACEHOLDER
    }
}

fn error_detail(err: &CaptureError) -> String {
    match err {
        CaptureError::BodyFetchFailed { message } => message.clone(),
        other => other.to_string(),
    }
}
