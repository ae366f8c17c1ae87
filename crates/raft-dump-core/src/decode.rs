//! # decode
//!
//! why: turn command and membership payloads into structured values without ever aborting
//! relations: fed by classify.rs, uses codec.rs + schema.rs, output goes to record.rs
//! what: SchemaDecoder, PeerSetDecoder, Decoded result, PeerSet wrapper

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::codec::PayloadCodec;
use crate::error::CodecError;
use crate::message::MessageType;
use crate::schema::{
    AclRequest, Coordinates, DeregisterRequest, KvsRequest, PreparedQueryRequest,
    RegisterRequest, SessionRequest, TombstoneRequest,
};

/// Outcome of decoding one payload.
///
/// `data` is always usable. When `error` is set it holds best-effort data:
/// for known types the schema-less decode of the payload, or the schema's
/// empty shape if the bytes are not msgpack at all; `null` for unknown types;
/// no peers for membership changes.
#[derive(Debug)]
pub struct Decoded {
    pub msg_type: String,
    pub data: Value,
    pub error: Option<CodecError>,
}

impl Decoded {
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Decodes command payloads by message type tag
#[derive(Debug, Clone, Copy)]
pub struct SchemaDecoder<'c, C> {
    codec: &'c C,
}

impl<'c, C: PayloadCodec> SchemaDecoder<'c, C> {
    pub fn new(codec: &'c C) -> Self {
        Self { codec }
    }

    /// Decode `tail`, the command payload after its tag byte.
    pub fn decode(&self, tag: u8, tail: &[u8]) -> Decoded {
        let msg_type = MessageType::from_tag(tag);
        let (data, error) = match msg_type {
            MessageType::Register => self.decode_as::<RegisterRequest>(tail),
            MessageType::Deregister => self.decode_as::<DeregisterRequest>(tail),
            MessageType::Kvs => self.decode_as::<KvsRequest>(tail),
            MessageType::Session => self.decode_as::<SessionRequest>(tail),
            MessageType::Acl => self.decode_as::<AclRequest>(tail),
            MessageType::Tombstone => self.decode_as::<TombstoneRequest>(tail),
            MessageType::CoordinateBatchUpdate => self.decode_as::<Coordinates>(tail),
            MessageType::PreparedQuery => self.decode_as::<PreparedQueryRequest>(tail),
            MessageType::Unknown(_) => match self.codec.decode_dynamic(tail) {
                Ok(value) => (value, None),
                Err(err) => (Value::Null, Some(err)),
            },
        };

        if let Some(err) = &error {
            warn!(tag, msg_type = %msg_type.name(), error = %err, "error while decoding message");
        }

        Decoded { msg_type: msg_type.name().into_owned(), data, error }
    }

    fn decode_as<T>(&self, tail: &[u8]) -> (Value, Option<CodecError>)
    where
        T: DeserializeOwned + Serialize + Default,
    {
        let err = match self.codec.decode_schema::<T>(tail) {
            // schema types only hold string-keyed maps, so this cannot fail
            Ok(decoded) => return (serde_json::to_value(&decoded).unwrap_or(Value::Null), None),
            Err(err) => err,
        };
        // well-formed msgpack that does not fit the schema keeps every field it has
        let data = self.codec.decode_dynamic(tail).unwrap_or_else(|_| {
            serde_json::to_value(T::default()).unwrap_or(Value::Null)
        });
        (data, Some(err))
    }
}

/// Membership change payload as emitted
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeerSet {
    #[serde(rename = "Peers")]
    pub peers: Vec<String>,
}

/// Decodes AddPeer / RemovePeer payloads: a msgpack list of peer addresses
#[derive(Debug, Clone, Copy)]
pub struct PeerSetDecoder<'c, C> {
    codec: &'c C,
}

impl<'c, C: PayloadCodec> PeerSetDecoder<'c, C> {
    pub fn new(codec: &'c C) -> Self {
        Self { codec }
    }

    pub fn decode_peers(&self, payload: &[u8]) -> (Vec<String>, Option<CodecError>) {
        match self.codec.decode_schema::<Vec<String>>(payload) {
            Ok(peers) => (peers, None),
            Err(err) => {
                warn!(error = %err, "error while decoding peer list");
                (Vec::new(), Some(err))
            }
        }
    }

    /// Decode and wrap as `{"Peers": [...]}`
    pub fn decode(&self, payload: &[u8]) -> Decoded {
        let (peers, error) = self.decode_peers(payload);
        let data = serde_json::to_value(PeerSet { peers }).unwrap_or(Value::Null);
        Decoded { msg_type: String::new(), data, error }
    }
}
