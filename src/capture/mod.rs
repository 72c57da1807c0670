//! Capture log of completed exchanges.
//!
//! - [`CaptureStore`](store::CaptureStore): ordered log with the preserve-on-navigation flag
//! - [`BodyFetcher`](fetch::BodyFetcher): host capability yielding response bodies

pub mod fetch;
pub mod store;

pub use fetch::{BodyFetcher, FailingBody, FetchedBody, FnFetcher, HarContentFetcher, StaticBody};
pub use store::{CaptureStore, CapturedExchange, ExchangeId};
