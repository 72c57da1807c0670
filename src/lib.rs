//! # netlog
//!
//! Capture log for completed HTTP exchanges with a live URL filter and cURL
//! export, built for developer-tools network panels.
//!
//! The host delivers finished exchanges as HAR-shaped records together with a
//! capability that fetches the response body. `netlog` keeps them in capture
//! order, filters them with a wildcard URL pattern, and turns each one into a
//! shell command that replays the request.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use netlog::capture::{CaptureStore, StaticBody};
//! use netlog::har::ExchangeRecord;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut store = CaptureStore::new();
//!     let record = ExchangeRecord::new("GET", "https://example.com/api/items")
//!         .with_header("Accept", "application/json");
//!     store.append(record, Arc::new(StaticBody::new("[]")));
//!
//!     let document = netlog::export::export_log(&store, "*/api/*").await.unwrap();
//!     println!("{}", document);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error type and error context helpers
//! - [`har`] - Exchange records, HAR parsing and list-row summaries
//! - [`filter`] - Wildcard URL filter
//! - [`capture`] - Capture store and body fetch capability
//! - [`curl`] - cURL command synthesis and shell quoting
//! - [`export`] - Export document, clipboard and download sinks
//! - [`panel`] - Panel state, views and user actions

pub mod base;
pub mod capture;
pub mod curl;
pub mod export;
pub mod filter;
pub mod har;
pub mod panel;
