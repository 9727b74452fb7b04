//! Session activity logging with JSONL storage.
//!
//! Every launch gets a session id; tracing events are written both to the
//! console and, when a logs directory is configured, to
//! `logs/<date>_<session>.jsonl`.
//!
//! ## Usage
//!
//! ```ignore
//! use sketchmentor_core::logging::LoggingBuilder;
//!
//! let log_file = LoggingBuilder::new()
//!     .with_logs_dir(config.logs_dir())
//!     .with_filter("sketchmentor_core=debug")
//!     .init()?;
//! ```
//!
//! ### Querying logs with jq
//!
//! ```bash
//! # Status transitions
//! jq 'select(.msg == "Waitlist status changed") | .fields' logs/*.jsonl
//!
//! # Storage anomalies
//! jq 'select(.level == "warn")' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::ActivityEntry;
pub use layer::{JsonlLayer, LoggingBuilder, DEFAULT_FILTER};
pub use writer::{read_entries, SessionLogWriter};
