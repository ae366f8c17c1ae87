//! # dump
//!
//! why: walk the whole log once, in index order, one record per entry
//! relations: pulls from source.rs, routes through classify.rs + decode.rs, writes via record.rs
//! what: Dumper, DumpSummary

use std::io::Write;

use serde_json::Value;
use tracing::{debug, debug_span, info};

use crate::classify::{classify, Path};
use crate::codec::PayloadCodec;
use crate::decode::{Decoded, PeerSetDecoder, SchemaDecoder};
use crate::error::DumpError;
use crate::log::LogEntry;
use crate::record::{DecodedRecord, Emitted, RecordEmitter};
use crate::source::EntrySource;

/// Counters for a finished scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    /// entries read from the source
    pub entries: u64,
    /// records written
    pub emitted: u64,
    /// records dropped because they could not be serialized
    pub skipped: u64,
    /// records written with placeholder data after a decode failure
    pub degraded: u64,
}

/// Renders log entries as records
#[derive(Debug, Clone, Copy)]
pub struct Dumper<'c, C> {
    codec: &'c C,
}

impl<'c, C: PayloadCodec> Dumper<'c, C> {
    pub fn new(codec: &'c C) -> Self {
        Self { codec }
    }

    /// Decode a single entry. Never fails: decode errors degrade the data.
    pub fn render(&self, entry: &LogEntry) -> (DecodedRecord, bool) {
        let path = classify(entry);
        debug!(?path, "classified entry");

        let decoded = match path {
            Path::Dispatch { tag, tail } => SchemaDecoder::new(self.codec).decode(tag, tail),
            Path::PeerSet => PeerSetDecoder::new(self.codec).decode(&entry.data),
            Path::Passthrough => Decoded {
                msg_type: String::new(),
                data: Value::from(entry.data.clone()),
                error: None,
            },
        };

        let degraded = decoded.is_degraded();
        let record =
            DecodedRecord::new(entry.index, entry.term, entry.kind, decoded.msg_type, decoded.data);
        (record, degraded)
    }

    /// Scan `first_index..last_index` and emit a record for every entry.
    ///
    /// The entry at `last_index` itself is not read.
    pub fn run<S, W>(
        &self,
        source: &S,
        emitter: &mut RecordEmitter<W>,
    ) -> Result<DumpSummary, DumpError>
    where
        S: EntrySource + ?Sized,
        W: Write,
    {
        let first = source.first_index().map_err(DumpError::Bounds)?;
        let last = source.last_index().map_err(DumpError::Bounds)?;
        info!(first, last, count = last.saturating_sub(first), "reading raft log");

        let mut summary = DumpSummary::default();
        for index in first..last {
            let _span = debug_span!("entry", index).entered();

            let entry = source.get(index).map_err(|err| DumpError::Entry { index, source: err })?;
            summary.entries += 1;

            let (record, degraded) = self.render(&entry);
            if degraded {
                summary.degraded += 1;
            }
            match emitter.emit(&record)? {
                Emitted::Written => summary.emitted += 1,
                Emitted::Skipped => summary.skipped += 1,
            }
        }
        emitter.flush()?;

        info!(
            entries = summary.entries,
            emitted = summary.emitted,
            skipped = summary.skipped,
            degraded = summary.degraded,
            "finished reading raft log"
        );
        Ok(summary)
    }
}
