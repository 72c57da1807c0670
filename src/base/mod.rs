//! Base types and error handling.
//!
//! - [`CaptureError`](error::CaptureError): failures across capture, export and panel
//! - [`IoResultExt`](context::IoResultExt): IO error context helpers

pub mod context;
pub mod error;

pub use error::CaptureError;
