//! # classify
//!
//! why: pick a decoding strategy from the entry kind alone
//! relations: consumes log.rs entries, drives decode.rs from dump.rs
//! what: Path enum, classify()

use crate::log::{CoarseKind, LogEntry};

/// How an entry's payload is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Path<'a> {
    /// Command payload: first byte is the message type tag
    Dispatch { tag: u8, tail: &'a [u8] },
    /// Membership change: payload is a msgpack list of peer addresses
    PeerSet,
    /// Payload is emitted verbatim
    Passthrough,
}

/// Classify an entry. Total over every kind ordinal.
pub fn classify(entry: &LogEntry) -> Path<'_> {
    match entry.coarse_kind() {
        Some(CoarseKind::Command) => match entry.data.split_first() {
            Some((&tag, tail)) => Path::Dispatch { tag, tail },
            // no tag byte to read
            None => Path::Passthrough,
        },
        Some(CoarseKind::AddPeer | CoarseKind::RemovePeer) => Path::PeerSet,
        Some(CoarseKind::Noop | CoarseKind::Barrier) | None => Path::Passthrough,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_splits_tag_from_tail() {
        let entry = LogEntry::new(1, 1, CoarseKind::Command, vec![2, 0xaa, 0xbb]);
        assert_eq!(classify(&entry), Path::Dispatch { tag: 2, tail: &[0xaa, 0xbb] });
    }

    #[test]
    fn command_with_only_tag_has_empty_tail() {
        let entry = LogEntry::new(1, 1, CoarseKind::Command, vec![7]);
        assert_eq!(classify(&entry), Path::Dispatch { tag: 7, tail: &[] });
    }

    #[test]
    fn empty_command_is_passthrough() {
        let entry = LogEntry::new(1, 1, CoarseKind::Command, vec![]);
        assert_eq!(classify(&entry), Path::Passthrough);
    }

    #[test]
    fn membership_changes_decode_peers() {
        let add = LogEntry::new(1, 1, CoarseKind::AddPeer, vec![]);
        let remove = LogEntry::new(2, 1, CoarseKind::RemovePeer, vec![]);
        assert_eq!(classify(&add), Path::PeerSet);
        assert_eq!(classify(&remove), Path::PeerSet);
    }

    #[test]
    fn noop_barrier_and_unknown_pass_through() {
        let noop = LogEntry::new(1, 1, CoarseKind::Noop, vec![1, 2]);
        let barrier = LogEntry::new(2, 1, CoarseKind::Barrier, vec![]);
        let unknown = LogEntry::with_raw_kind(3, 1, 200, vec![0]);
        assert_eq!(classify(&noop), Path::Passthrough);
        assert_eq!(classify(&barrier), Path::Passthrough);
        assert_eq!(classify(&unknown), Path::Passthrough);
    }
}
