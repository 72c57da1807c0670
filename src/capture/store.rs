use crate::capture::fetch::{BodyFetcher, Fetching};
use crate::filter::UrlFilter;
use crate::har::record::ExchangeRecord;
use std::fmt;
use std::sync::Arc;

/// Identity of a captured exchange, unique for the lifetime of its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExchangeId(u64);

impl ExchangeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// An exchange as held by the store. Immutable once captured.
pub struct CapturedExchange {
    id: ExchangeId,
    record: ExchangeRecord,
    body: Arc<dyn BodyFetcher>,
}

impl CapturedExchange {
    pub fn id(&self) -> ExchangeId {
        self.id
    }

    pub fn record(&self) -> &ExchangeRecord {
        &self.record
    }

    /// Ask the host for the response body.
    pub fn fetch_body(&self) -> Fetching {
        self.body.fetch()
    }
}

impl fmt::Debug for CapturedExchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedExchange")
            .field("id", &self.id)
            .field("method", &self.record.request.method)
            .field("url", &self.record.request.url)
            .finish()
    }
}

/// Insertion-ordered log of captured exchanges.
///
/// Entries are never reordered or deduplicated. A navigation clears the log
/// unless `preserve_log` is set; [`CaptureStore::clear`] always does.
#[derive(Debug, Default)]
pub struct CaptureStore {
    entries: Vec<Arc<CapturedExchange>>,
    preserve_log: bool,
    selected: Option<ExchangeId>,
    next_id: u64,
}

impl CaptureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preserve_log(preserve_log: bool) -> Self {
        Self {
            preserve_log,
            ..Self::default()
        }
    }

    /// Append a finished exchange together with its body capability.
    pub fn append(
        &mut self,
        record: ExchangeRecord,
        body: Arc<dyn BodyFetcher>,
    ) -> Arc<CapturedExchange> {
        let id = ExchangeId(self.next_id);
        self.next_id += 1;

        tracing::debug!(id = %id, method = %record.request.method, url = %record.request.url, "captured exchange");

        let exchange = Arc::new(CapturedExchange { id, record, body });
        self.entries.push(exchange.clone());
        exchange
    }

    /// Drop every entry and the selection. The preserve flag is untouched.
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.entries.len(), "clearing capture log");
        self.entries.clear();
        self.selected = None;
    }

    /// Handle a page navigation. Returns whether the log was cleared.
    pub fn on_navigation(&mut self) -> bool {
        if self.preserve_log {
            tracing::debug!(kept = self.entries.len(), "navigation with preserved log");
            return false;
        }
        self.clear();
        true
    }

    pub fn preserve_log(&self) -> bool {
        self.preserve_log
    }

    pub fn set_preserve_log(&mut self, preserve: bool) {
        self.preserve_log = preserve;
    }

    /// Entries whose URL matches `pattern`, in capture order.
    pub fn visible(&self, pattern: &str) -> Vec<Arc<CapturedExchange>> {
        self.visible_with(&UrlFilter::compile(pattern))
    }

    pub fn visible_with(&self, filter: &UrlFilter) -> Vec<Arc<CapturedExchange>> {
        self.entries
            .iter()
            .filter(|e| filter.is_match(e.record.url()))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: ExchangeId) -> Option<Arc<CapturedExchange>> {
        self.entries.iter().find(|e| e.id == id).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<CapturedExchange>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Select an entry. Unknown ids clear the selection.
    pub fn select(&mut self, id: ExchangeId) -> Option<Arc<CapturedExchange>> {
        let found = self.get(id);
        self.selected = found.as_ref().map(|e| e.id);
        found
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected entry, if it is still in the log.
    pub fn selected(&self) -> Option<Arc<CapturedExchange>> {
        self.selected.and_then(|id| self.get(id))
    }
}
