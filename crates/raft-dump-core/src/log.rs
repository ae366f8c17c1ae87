//! # log
//!
//! why: model the entries a raft log store hands back, exactly as persisted
//! relations: produced by an EntrySource, read by classify.rs and dump.rs
//! what: LogEntry struct, CoarseKind enum, total kind-name lookup

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// The replication-level classification of a log entry.
///
/// Persisted as its ordinal (0-4). Stores written by newer raft versions may
/// carry ordinals outside this range, so entries keep the raw byte and
/// resolve it through [`CoarseKind::from_ordinal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoarseKind {
    /// Application command; payload starts with a message type tag
    Command,
    /// Leader no-op written at the start of a term
    Noop,
    /// Membership change adding a peer
    AddPeer,
    /// Membership change removing a peer
    RemovePeer,
    /// Barrier used to flush the FSM
    Barrier,
}

impl CoarseKind {
    /// Resolve a persisted ordinal, `None` if the ordinal is out of range.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Command),
            1 => Some(Self::Noop),
            2 => Some(Self::AddPeer),
            3 => Some(Self::RemovePeer),
            4 => Some(Self::Barrier),
            _ => None,
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            Self::Command => 0,
            Self::Noop => 1,
            Self::AddPeer => 2,
            Self::RemovePeer => 3,
            Self::Barrier => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Command => "Command",
            Self::Noop => "Noop",
            Self::AddPeer => "AddPeer",
            Self::RemovePeer => "RemovePeer",
            Self::Barrier => "Barrier",
        }
    }
}

/// Name of a persisted kind ordinal.
///
/// Total over `u8`: unknown ordinals are rendered as their decimal value.
pub fn kind_name(ordinal: u8) -> Cow<'static, str> {
    match CoarseKind::from_ordinal(ordinal) {
        Some(kind) => Cow::Borrowed(kind.name()),
        None => Cow::Owned(ordinal.to_string()),
    }
}

/// A single entry in the persisted raft log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The index of this entry in the log
    pub index: u64,
    /// The term when this entry was created
    pub term: u64,
    /// Raw kind ordinal, see [`CoarseKind`]
    pub kind: u8,
    /// Opaque payload bytes
    #[serde(default)]
    pub data: Vec<u8>,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(index: u64, term: u64, kind: CoarseKind, data: Vec<u8>) -> Self {
        Self { index, term, kind: kind.ordinal(), data }
    }

    /// Create an entry with an arbitrary kind ordinal
    pub fn with_raw_kind(index: u64, term: u64, kind: u8, data: Vec<u8>) -> Self {
        Self { index, term, kind, data }
    }

    pub fn coarse_kind(&self) -> Option<CoarseKind> {
        CoarseKind::from_ordinal(self.kind)
    }
}
