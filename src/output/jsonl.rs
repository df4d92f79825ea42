//! JSON-lines record sink
//!
//! Writes one serialized record per line. Field names follow the record's
//! wire layout verbatim, so the output file is a stable storage contract.

use crate::output::traits::{RecordSink, SinkError, SinkResult};
use crate::record::ProductRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// File-backed sink producing one JSON object per line
pub struct JsonLinesSink {
    writer: BufWriter<File>,
    written: u64,
}

impl JsonLinesSink {
    /// Creates (or truncates) the output file at `path`
    pub fn create(path: &Path) -> SinkResult<Self> {
        let file = File::create(path).map_err(SinkError::Io)?;
        Ok(Self {
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    /// Returns the number of records written so far
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl RecordSink for JsonLinesSink {
    fn write(&mut self, record: &ProductRecord) -> SinkResult<()> {
        let line = serde_json::to_string(record)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn flush(&mut self) -> SinkResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
