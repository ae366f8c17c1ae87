//! # message
//!
//! why: map the one-byte tag of a command entry to the application message it carries
//! relations: used by decode.rs to pick a schema from schema.rs
//! what: MessageType enum with an Unknown(tag) variant, tag registry

use std::borrow::Cow;

/// Tags with this bit set may be skipped by servers that do not know them.
pub const IGNORE_UNKNOWN_FLAG: u8 = 0x80;

/// Application message types found in command entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    Register,
    Deregister,
    Kvs,
    Session,
    Acl,
    Tombstone,
    CoordinateBatchUpdate,
    PreparedQuery,
    /// Tag not known to this build; decoded generically
    Unknown(u8),
}

impl MessageType {
    /// Every registered type, in tag order
    pub const KNOWN: [MessageType; 8] = [
        Self::Register,
        Self::Deregister,
        Self::Kvs,
        Self::Session,
        Self::Acl,
        Self::Tombstone,
        Self::CoordinateBatchUpdate,
        Self::PreparedQuery,
    ];

    pub fn from_tag(tag: u8) -> Self {
        match tag {
            0 => Self::Register,
            1 => Self::Deregister,
            2 => Self::Kvs,
            3 => Self::Session,
            4 => Self::Acl,
            5 => Self::Tombstone,
            // 134 is the coordinate update tag with IGNORE_UNKNOWN_FLAG set
            6 | 134 => Self::CoordinateBatchUpdate,
            7 => Self::PreparedQuery,
            other => Self::Unknown(other),
        }
    }

    /// Canonical tag. Aliases resolve to the same type but are not returned here.
    pub fn tag(self) -> u8 {
        match self {
            Self::Register => 0,
            Self::Deregister => 1,
            Self::Kvs => 2,
            Self::Session => 3,
            Self::Acl => 4,
            Self::Tombstone => 5,
            Self::CoordinateBatchUpdate => 6,
            Self::PreparedQuery => 7,
            Self::Unknown(tag) => tag,
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Name used in the `msgtype` field of emitted records
    pub fn name(self) -> Cow<'static, str> {
        let name = match self {
            Self::Register => "RegisterRequest",
            Self::Deregister => "DeregisterRequest",
            Self::Kvs => "KVSRequest",
            Self::Session => "SessionRequest",
            Self::Acl => "ACLRequest",
            Self::Tombstone => "TombstoneRequest",
            Self::CoordinateBatchUpdate => "Coordinates",
            Self::PreparedQuery => "PreparedQueryRequest",
            Self::Unknown(tag) => return Cow::Owned(tag.to_string()),
        };
        Cow::Borrowed(name)
    }
}
