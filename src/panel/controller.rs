//! The network log panel.
//!
//! Owns the capture store and the filter text, reacts to host events and
//! drives the copy and download actions. All state is touched from a single
//! task; body fetches are the only await points.

use crate::base::error::CaptureError;
use crate::capture::fetch::BodyFetcher;
use crate::capture::store::{CaptureStore, ExchangeId};
use crate::export::sink::{
    copy_text, ClipboardSink, CopyFeedback, DirectoryDownloadSink, DownloadSink,
};
use crate::export::{download_filename, export_entries};
use crate::filter::UrlFilter;
use crate::har::record::ExchangeRecord;
use crate::har::summary::RequestRow;
use crate::panel::config::PanelConfig;
use crate::panel::view::{DetailsView, EmptyState, ListView};
use std::path::PathBuf;
use std::sync::Arc;
use time::OffsetDateTime;

/// User actions that need at least one visible request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportAction {
    Download,
    CopyLog,
}

impl ExportAction {
    /// Notice shown when nothing matches the filter.
    pub fn no_requests_notice(&self) -> &'static str {
        match self {
            ExportAction::Download => "No requests to download.",
            ExportAction::CopyLog => "No requests to copy.",
        }
    }
}

/// What an [`ExportAction`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Saved(PathBuf),
    Copied(CopyFeedback),
    /// Nothing passed the filter; show this text instead.
    Notice(&'static str),
}

pub struct NetlogPanel {
    store: CaptureStore,
    filter_text: String,
    filter: UrlFilter,
    empty_state: EmptyState,
    details: DetailsView,
    config: PanelConfig,
    clipboard: Box<dyn ClipboardSink>,
    downloads: Box<dyn DownloadSink>,
}

impl NetlogPanel {
    pub fn new(
        config: PanelConfig,
        clipboard: Box<dyn ClipboardSink>,
        downloads: Box<dyn DownloadSink>,
    ) -> Self {
        Self {
            store: CaptureStore::with_preserve_log(config.preserve_log),
            filter_text: String::new(),
            filter: UrlFilter::All,
            empty_state: EmptyState::Waiting,
            details: DetailsView::placeholder(),
            config,
            clipboard,
            downloads,
        }
    }

    /// Panel whose downloads land in `config.download_dir`.
    pub fn with_directory_downloads(
        config: PanelConfig,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let downloads = Box::new(DirectoryDownloadSink::new(config.download_dir.clone()));
        Self::new(config, clipboard, downloads)
    }

    pub fn store(&self) -> &CaptureStore {
        &self.store
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Host event: an exchange finished. Returns its row when it passes the filter.
    pub fn on_request_finished(
        &mut self,
        record: ExchangeRecord,
        body: Arc<dyn BodyFetcher>,
    ) -> Option<RequestRow> {
        let exchange = self.store.append(record, body);
        self.filter
            .is_match(exchange.record().url())
            .then(|| RequestRow::from_exchange(&exchange))
    }

    /// Host event: the inspected page navigated.
    pub fn on_navigated(&mut self) {
        if self.store.on_navigation() {
            self.reset_views();
        }
    }

    pub fn preserve_log(&self) -> bool {
        self.store.preserve_log()
    }

    pub fn set_preserve_log(&mut self, preserve: bool) {
        self.store.set_preserve_log(preserve);
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Replace the filter and re-render the list.
    pub fn set_filter(&mut self, text: impl Into<String>) -> ListView {
        self.filter_text = text.into();
        self.filter = UrlFilter::compile(&self.filter_text);
        self.empty_state = EmptyState::Waiting;
        self.list_view()
    }

    pub fn list_view(&self) -> ListView {
        let rows: Vec<RequestRow> = self
            .store
            .visible_with(&self.filter)
            .iter()
            .map(|e| RequestRow::from_exchange(e))
            .collect();

        if !rows.is_empty() {
            ListView::Rows(rows)
        } else if self.store.is_empty() {
            ListView::Empty(self.empty_state)
        } else {
            ListView::Empty(EmptyState::NoMatches)
        }
    }

    /// Empty the log regardless of the preserve flag.
    pub fn clear(&mut self) {
        self.store.clear();
        self.reset_views();
    }

    fn reset_views(&mut self) {
        self.empty_state = EmptyState::Cleared;
        self.details = DetailsView::placeholder();
    }

    /// Select an exchange and render its details.
    pub async fn select(&mut self, id: ExchangeId) -> &DetailsView {
        self.details = match self.store.select(id) {
            Some(exchange) => {
                tracing::debug!(id = %id, "selected exchange");
                DetailsView::render(&exchange).await
            }
            None => DetailsView::placeholder(),
        };
        &self.details
    }

    pub fn selected_id(&self) -> Option<ExchangeId> {
        self.store.selected().map(|e| e.id())
    }

    pub fn details(&self) -> &DetailsView {
        &self.details
    }

    /// Export document for every exchange passing the current filter.
    pub async fn export(&self) -> Result<String, CaptureError> {
        let visible = self.store.visible_with(&self.filter);
        export_entries(&visible, self.config.separator_width).await
    }

    /// Export and hand the document to the download sink.
    pub async fn download(&self) -> Result<PathBuf, CaptureError> {
        let document = self.export().await?;
        let filename = download_filename(&self.config.filename_prefix, OffsetDateTime::now_utc());
        self.downloads.save(&document, &filename).inspect_err(|e| {
            tracing::warn!(filename = %filename, error = %e, "download failed");
        })
    }

    /// Export and copy the document to the clipboard.
    pub async fn copy_log(&self) -> Result<CopyFeedback, CaptureError> {
        let document = self.export().await?;
        Ok(self.copy(&document))
    }

    /// Run a toolbar action, turning an empty export into its notice.
    pub async fn perform(&self, action: ExportAction) -> Result<ActionOutcome, CaptureError> {
        let result = match action {
            ExportAction::Download => self.download().await.map(ActionOutcome::Saved),
            ExportAction::CopyLog => self.copy_log().await.map(ActionOutcome::Copied),
        };
        match result {
            Err(CaptureError::NoMatchingRequests) => {
                Ok(ActionOutcome::Notice(action.no_requests_notice()))
            }
            other => other,
        }
    }

    /// Copy the command currently shown in the cURL tab.
    pub fn copy_curl(&self) -> CopyFeedback {
        self.copy(&self.details.curl)
    }

    /// Copy the body currently shown in the Response tab.
    pub fn copy_response(&self) -> CopyFeedback {
        self.copy(&self.details.response)
    }

    pub fn copy(&self, text: &str) -> CopyFeedback {
        copy_text(self.clipboard.as_ref(), text)
    }
}
