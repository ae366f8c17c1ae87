//! # raft-dump-storage
//!
//! why: open persisted raft logs read-only and serve entries by index
//! relations: implements raft-dump-core's EntrySource, opened by the raft-dump binary
//! what: StoreError, FileLogStore implementation, InMemoryLogStore for testing

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use raft_dump_core::{EntrySource, LogEntry, SourceError};
use thiserror::Error;
use tracing::debug;

/// errors raised while opening or reading a log store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no raft log at {0}")]
    Missing(PathBuf),

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corrupt raft log {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("log entry {0} not found")]
    NotFound(u64),
}

impl From<StoreError> for SourceError {
    fn from(err: StoreError) -> Self {
        SourceError::new(err)
    }
}

/// entries keyed by index, shared by both stores
#[derive(Debug, Default, Clone)]
struct EntryIndex {
    entries: BTreeMap<u64, LogEntry>,
}

impl EntryIndex {
    fn first(&self) -> u64 {
        self.entries.keys().next().copied().unwrap_or(0)
    }

    fn last(&self) -> u64 {
        self.entries.keys().next_back().copied().unwrap_or(0)
    }

    fn get(&self, index: u64) -> Result<LogEntry, StoreError> {
        self.entries.get(&index).cloned().ok_or(StoreError::NotFound(index))
    }

    fn insert(&mut self, entry: LogEntry) {
        self.entries.insert(entry.index, entry);
    }
}

// -- file log store --

/// read-only view of an on-disk raft store directory
///
/// the directory holds:
/// - log.json: array of log entries `{index, term, kind, data}`
///
/// the file is read once at open; nothing is ever written back.
#[derive(Debug)]
pub struct FileLogStore {
    /// directory the store was opened from
    dir: PathBuf,
    index: EntryIndex,
}

impl FileLogStore {
    /// name of the log file inside a store directory
    pub const LOG_FILE: &'static str = "log.json";

    /// open an existing store directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        let path = Self::log_path_in(&dir);
        if !path.is_file() {
            return Err(StoreError::Missing(dir));
        }

        let contents = fs::read_to_string(&path)
            .map_err(|source| StoreError::Io { path: path.clone(), source })?;
        let entries: Vec<LogEntry> = serde_json::from_str(&contents)
            .map_err(|source| StoreError::Corrupt { path: path.clone(), source })?;
        debug!(path = %path.display(), entries = entries.len(), "opened raft log");

        let mut index = EntryIndex::default();
        for entry in entries {
            index.insert(entry);
        }
        Ok(Self { dir, index })
    }

    /// directory the store was opened from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// get the path to the log file of a store directory
    pub fn log_path_in(dir: &Path) -> PathBuf {
        dir.join(Self::LOG_FILE)
    }

    /// number of entries in the log file
    pub fn len(&self) -> usize {
        self.index.entries.len()
    }

    /// true when the log file holds no entries
    pub fn is_empty(&self) -> bool {
        self.index.entries.is_empty()
    }
}

impl EntrySource for FileLogStore {
    fn first_index(&self) -> Result<u64, SourceError> {
        Ok(self.index.first())
    }

    fn last_index(&self) -> Result<u64, SourceError> {
        Ok(self.index.last())
    }

    fn get(&self, index: u64) -> Result<LogEntry, SourceError> {
        Ok(self.index.get(index)?)
    }
}

// -- in-memory log store --

/// in-memory log for testing
///
/// holds all entries in memory, nothing is persisted
#[derive(Debug, Default, Clone)]
pub struct InMemoryLogStore {
    index: EntryIndex,
}

impl InMemoryLogStore {
    /// create an empty in-memory log
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = LogEntry>) -> Self {
        let mut store = Self::new();
        for entry in entries {
            store.push(entry);
        }
        store
    }

    /// add an entry, replacing any entry already at its index
    pub fn push(&mut self, entry: LogEntry) {
        self.index.insert(entry);
    }

    /// number of entries held
    pub fn len(&self) -> usize {
        self.index.entries.len()
    }

    /// true when no entries have been pushed
    pub fn is_empty(&self) -> bool {
        self.index.entries.is_empty()
    }
}

impl EntrySource for InMemoryLogStore {
    fn first_index(&self) -> Result<u64, SourceError> {
        Ok(self.index.first())
    }

    fn last_index(&self) -> Result<u64, SourceError> {
        Ok(self.index.last())
    }

    fn get(&self, index: u64) -> Result<LogEntry, SourceError> {
        Ok(self.index.get(index)?)
    }
}
