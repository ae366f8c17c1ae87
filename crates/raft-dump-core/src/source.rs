//! # source
//!
//! why: read a persisted raft log without caring how it is stored
//! relations: implemented by raft-dump-storage, consumed by dump.rs
//! what: EntrySource trait

use crate::error::SourceError;
use crate::log::LogEntry;

/// Read-only access to a persisted raft log
///
/// implemented by:
/// - FileLogStore (on-disk store directory)
/// - InMemoryLogStore (testing, embedding)
pub trait EntrySource {
    /// index of the first entry, 0 if the log is empty
    fn first_index(&self) -> Result<u64, SourceError>;

    /// index of the last entry, 0 if the log is empty
    fn last_index(&self) -> Result<u64, SourceError>;

    /// fetch the entry stored at `index`
    fn get(&self, index: u64) -> Result<LogEntry, SourceError>;
}

impl<S: EntrySource + ?Sized> EntrySource for &S {
    fn first_index(&self) -> Result<u64, SourceError> {
        (**self).first_index()
    }

    fn last_index(&self) -> Result<u64, SourceError> {
        (**self).last_index()
    }

    fn get(&self, index: u64) -> Result<LogEntry, SourceError> {
        (**self).get(index)
    }
}
