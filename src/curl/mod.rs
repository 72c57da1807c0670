//! cURL command synthesis.
//!
//! Turns a captured exchange into a shell command that replays the request:
//!
//! ```text
//! curl 'https://api.example.com/items' \
//!   -H 'Accept: application/json' \
//!   -b 'session=abc' \
//!   --data-raw $'line one\nline two'
//! ```
//!
//! Headers keep their captured order and duplicates. The `Cookie` header is
//! emitted once through `-b`. Bodies with line breaks use ANSI-C quoting.

pub mod quote;
pub mod synthesize;

pub use synthesize::synthesize;
