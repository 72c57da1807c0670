//! Network log panel state and actions.
//!
//! [`NetlogPanel`] ties the capture store, the URL filter and the export
//! pipeline to the host's events and to the clipboard and download sinks.

pub mod config;
pub mod controller;
pub mod view;

pub use config::PanelConfig;
pub use controller::{ActionOutcome, ExportAction, NetlogPanel};
pub use view::{DetailsView, EmptyState, ListView};
