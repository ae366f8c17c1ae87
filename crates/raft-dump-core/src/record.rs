//! # record
//!
//! why: give every log entry the same output shape, one JSON object per line
//! relations: fed by dump.rs with decode.rs output
//! what: DecodedRecord, RecordEmitter, Emitted

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::log::kind_name;

/// One emitted line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedRecord {
    pub index: u64,
    pub term: u64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "msgtype")]
    pub msg_type: String,
    pub data: Value,
}

impl DecodedRecord {
    /// Assemble a record, resolving the kind ordinal to its name
    pub fn new(index: u64, term: u64, kind: u8, msg_type: impl Into<String>, data: Value) -> Self {
        Self {
            index,
            term,
            kind: kind_name(kind).into_owned(),
            msg_type: msg_type.into(),
            data,
        }
    }
}

/// Result of a single emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emitted {
    Written,
    /// Record could not be serialized and was dropped.
    ///
    /// Not reachable with `serde_json::Value` data, whose serialization
    /// cannot fail; kept so a non-`Value` payload cannot abort a scan.
    Skipped,
}

/// Writes records as newline-delimited JSON
pub struct RecordEmitter<W> {
    out: W,
    line: Vec<u8>,
}

impl<W: Write> RecordEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out, line: Vec::with_capacity(256) }
    }

    /// Serialize and write one record.
    ///
    /// A record that cannot be serialized is logged and skipped; only a
    /// failing writer is returned as an error.
    pub fn emit(&mut self, record: &DecodedRecord) -> io::Result<Emitted> {
        self.line.clear();
        if let Err(err) = serde_json::to_writer(&mut self.line, record) {
            warn!(index = record.index, error = %err, "error serializing record");
            return Ok(Emitted::Skipped);
        }
        self.line.push(b'\n');
        self.out.write_all(&self.line)?;
        Ok(Emitted::Written)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
