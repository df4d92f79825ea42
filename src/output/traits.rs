//! Record sink trait and types
//!
//! Sinks receive finished product records. They are append-only: records
//! share no mutable state after normalization, so independent records may be
//! written from independent pipeline invocations.

use crate::record::ProductRecord;
use thiserror::Error;

/// Errors that can occur while writing records
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Receiver of finished product records
pub trait RecordSink {
    /// Appends one record
    fn write(&mut self, record: &ProductRecord) -> SinkResult<()>;

    /// Flushes any buffered output
    fn flush(&mut self) -> SinkResult<()>;
}
