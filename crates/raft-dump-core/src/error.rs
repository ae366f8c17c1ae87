//! # error
//!
//! why: separate per-record decode failures from failures that end the scan
//! relations: CodecError is produced by codec.rs, DumpError by dump.rs
//! what: CodecError, SourceError, DumpError

use std::io;

use thiserror::Error;

/// A payload could not be decoded. Recoverable: the record is still emitted.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed msgpack payload: {0}")]
    Msgpack(#[from] rmp_serde::decode::Error),
}

/// The entry source failed. Fatal to the scan.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct SourceError(Box<dyn std::error::Error + Send + Sync + 'static>);

impl SourceError {
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(err))
    }
}

/// Errors that abort a scan
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("reading log bounds: {0}")]
    Bounds(#[source] SourceError),

    #[error("reading log entry {index}: {source}")]
    Entry {
        index: u64,
        #[source]
        source: SourceError,
    },

    #[error("writing record: {0}")]
    Output(#[from] io::Error),
}
