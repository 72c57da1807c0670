//! Response body retrieval.
//!
//! The host owns response bodies; each captured exchange carries a
//! [`BodyFetcher`] that asks the host for the text on demand. Fetches are not
//! cached, so every selection or export triggers a fresh request.

use crate::base::error::CaptureError;
use crate::har::record::Content;
use base64::{engine::general_purpose, Engine as _};
use futures::future::{self, BoxFuture, FutureExt};
use std::{future::Future, sync::Arc};

/// Body text as reported by the host. `None` means the host had no content.
pub type FetchedBody = Result<Option<String>, CaptureError>;

/// Alias for the `Future` type returned by a body fetcher.
pub type Fetching = BoxFuture<'static, FetchedBody>;

/// Asynchronous capability that yields a response body on demand.
///
/// May be invoked any number of times; each call is expected to return the
/// same logical content.
pub trait BodyFetcher: Send + Sync {
    fn fetch(&self) -> Fetching;
}

/// Blanket implementation for Arc-wrapped fetchers.
impl<F: BodyFetcher + ?Sized> BodyFetcher for Arc<F> {
    fn fetch(&self) -> Fetching {
        (**self).fetch()
    }
}

/// Fetcher backed by a closure returning a future.
pub struct FnFetcher<F> {
    f: F,
}

impl<F, Fut> FnFetcher<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = FetchedBody> + Send + 'static,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, Fut> BodyFetcher for FnFetcher<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = FetchedBody> + Send + 'static,
{
    fn fetch(&self) -> Fetching {
        (self.f)().boxed()
    }
}

/// Resolves immediately with fixed content.
#[derive(Debug, Clone, Default)]
pub struct StaticBody {
    content: Option<String>,
}

impl StaticBody {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn empty() -> Self {
        Self { content: None }
    }
}

impl BodyFetcher for StaticBody {
    fn fetch(&self) -> Fetching {
        future::ready(Ok(self.content.clone())).boxed()
    }
}

/// Always reports a host error.
#[derive(Debug, Clone)]
pub struct FailingBody {
    message: String,
}

impl FailingBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl BodyFetcher for FailingBody {
    fn fetch(&self) -> Fetching {
        future::ready(Err(CaptureError::body_fetch_failed(self.message.clone()))).boxed()
    }
}

/// Serves the body embedded in a HAR `content` block.
#[derive(Debug, Clone, Default)]
pub struct HarContentFetcher {
    text: Option<String>,
    base64: bool,
}

impl HarContentFetcher {
    pub fn new(content: &Content) -> Self {
        Self {
            text: content.text.clone(),
            base64: content
                .encoding
                .as_deref()
                .is_some_and(|e| e.eq_ignore_ascii_case("base64")),
        }
    }

    fn decode(&self) -> FetchedBody {
        let Some(text) = &self.text else {
            return Ok(None);
        };
        if !self.base64 {
            return Ok(Some(text.clone()));
        }
        let bytes = general_purpose::STANDARD
            .decode(text.trim())
            .map_err(|e| CaptureError::body_fetch_failed(format!("invalid base64 body: {}", e)))?;
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

impl BodyFetcher for HarContentFetcher {
    fn fetch(&self) -> Fetching {
        future::ready(self.decode()).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(text: Option<&str>, encoding: Option<&str>) -> Content {
        Content {
            mime_type: None,
            text: text.map(String::from),
            encoding: encoding.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_static_body() {
        assert_eq!(StaticBody::new("hi").fetch().await, Ok(Some("hi".into())));
        assert_eq!(StaticBody::empty().fetch().await, Ok(None));
    }

    #[tokio::test]
    async fn test_failing_body() {
        let err = FailingBody::new("detached").fetch().await.unwrap_err();
        assert_eq!(err, CaptureError::body_fetch_failed("detached"));
    }

    #[tokio::test]
    async fn test_har_plain_text() {
        let fetcher = HarContentFetcher::new(&content(Some("{\"ok\":true}"), None));
        assert_eq!(fetcher.fetch().await, Ok(Some("{\"ok\":true}".into())));
    }

    #[tokio::test]
    async fn test_har_base64_text() {
        let fetcher = HarContentFetcher::new(&content(Some("aGVsbG8="), Some("base64")));
        assert_eq!(fetcher.fetch().await, Ok(Some("hello".into())));
    }

    #[tokio::test]
    async fn test_har_invalid_base64() {
        let fetcher = HarContentFetcher::new(&content(Some("***"), Some("base64")));
        assert!(matches!(
            fetcher.fetch().await,
            Err(CaptureError::BodyFetchFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_har_missing_text() {
        let fetcher = HarContentFetcher::new(&content(None, Some("base64")));
        assert_eq!(fetcher.fetch().await, Ok(None));
    }

    #[tokio::test]
    async fn test_fn_fetcher_called_each_time() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let fetcher = FnFetcher::new(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok(Some(format!("call {}", n))) }
        });

        assert_eq!(fetcher.fetch().await, Ok(Some("call 0".into())));
        assert_eq!(fetcher.fetch().await, Ok(Some("call 1".into())));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
