//! Logging infrastructure: structured change logging.
//!
//! Provides [`JsonlChangeLogger`], a JSONL file writer that implements
//! the [`ChangeLogger`](corosync_application::ChangeLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlChangeLogger;
