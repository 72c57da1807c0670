//! HAR-shaped exchange records.
//!
//! - [`record`]: the request/response model
//! - [`log`]: HAR document parsing and writing
//! - [`summary`]: list-row summaries

pub mod log;
pub mod record;
pub mod summary;

pub use record::{Content, ExchangeRecord, Header, Param, PostData, Request, Response};
pub use summary::RequestRow;
