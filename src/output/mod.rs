//! Output module for persisting finished product records
//!
//! This module handles:
//! - The sink trait records are handed to
//! - The JSON-lines file sink

mod jsonl;
mod traits;

pub use jsonl::JsonLinesSink;
pub use traits::{RecordSink, SinkError, SinkResult};
