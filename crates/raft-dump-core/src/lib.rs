//! # raft-dump-core
//!
//! why: render every entry of a persisted raft log as a structured, readable record
//! relations: entries come from raft-dump-storage, driven by the raft-dump binary
//! what: entry model, classification, message registry, payload decoding, record output

pub mod classify;
pub mod codec;
pub mod decode;
pub mod dump;
pub mod error;
pub mod log;
pub mod message;
pub mod record;
pub mod schema;
pub mod source;

pub use classify::{classify, Path};
pub use codec::{MsgpackCodec, PayloadCodec};
pub use decode::{Decoded, PeerSet, PeerSetDecoder, SchemaDecoder};
pub use dump::{DumpSummary, Dumper};
pub use error::{CodecError, DumpError, SourceError};
pub use log::{kind_name, CoarseKind, LogEntry};
pub use message::MessageType;
pub use record::{DecodedRecord, Emitted, RecordEmitter};
pub use source::EntrySource;
