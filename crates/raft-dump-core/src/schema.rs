//! # schema
//!
//! why: give each registered message type a typed shape to decode against
//! relations: selected by decode.rs through message.rs, encoded with codec.rs
//! what: request structs for catalog, kv, session, acl, tombstone, coordinate, prepared query
//!
//! Field names follow the application's wire names (PascalCase, `ID`
//! suffixes). Missing fields take their default and unknown fields are
//! ignored, so entries written by older or newer servers still decode.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque byte string.
///
/// Accepts msgpack bin, str (older encoders write raw bytes as str), or an
/// array of integers. Always re-encodes as bin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blob(pub Vec<u8>);

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BlobVisitor;

        impl<'de> Visitor<'de> for BlobVisitor {
            type Value = Blob;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a byte string")
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Blob, E> {
                Ok(Blob(v.to_vec()))
            }

            fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Blob, E> {
                Ok(Blob(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Blob, E> {
                Ok(Blob(v.as_bytes().to_vec()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Blob, E> {
                Ok(Blob::default())
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Blob, A::Error> {
                let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(b) = seq.next_element::<u8>()? {
                    bytes.push(b);
                }
                Ok(Blob(bytes))
            }
        }

        deserializer.deserialize_any(BlobVisitor)
    }
}

// -- catalog --

/// Catalog registration of a node, optionally with a service and checks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegisterRequest {
    pub datacenter: String,
    pub node: String,
    pub address: String,
    pub tagged_addresses: Option<BTreeMap<String, String>>,
    pub service: Option<NodeService>,
    pub check: Option<HealthCheck>,
    pub checks: Option<Vec<HealthCheck>>,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NodeService {
    #[serde(rename = "ID")]
    pub id: String,
    pub service: String,
    pub tags: Option<Vec<String>>,
    pub address: String,
    pub port: i64,
    pub enable_tag_override: bool,
    pub create_index: u64,
    pub modify_index: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HealthCheck {
    pub node: String,
    #[serde(rename = "CheckID")]
    pub check_id: String,
    pub name: String,
    pub status: String,
    pub notes: String,
    pub output: String,
    #[serde(rename = "ServiceID")]
    pub service_id: String,
    pub service_name: String,
    pub create_index: u64,
    pub modify_index: u64,
}

/// Catalog removal of a node, a service or a check
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeregisterRequest {
    pub datacenter: String,
    pub node: String,
    #[serde(rename = "ServiceID")]
    pub service_id: String,
    #[serde(rename = "CheckID")]
    pub check_id: String,
    pub token: String,
}

// -- key/value --

/// Key/value write. `Op` is one of `set`, `delete`, `delete-cas`,
/// `delete-tree`, `cas`, `lock`, `unlock`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KvsRequest {
    pub datacenter: String,
    pub op: String,
    pub dir_ent: DirEntry,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DirEntry {
    pub lock_index: u64,
    pub key: String,
    pub flags: u64,
    pub value: Option<Blob>,
    pub session: String,
    pub create_index: u64,
    pub modify_index: u64,
}

// -- sessions --

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SessionRequest {
    pub datacenter: String,
    /// `create` or `destroy`
    pub op: String,
    pub session: Session,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Session {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub node: String,
    pub checks: Option<Vec<String>>,
    /// nanoseconds
    pub lock_delay: i64,
    pub behavior: String,
    #[serde(rename = "TTL")]
    pub ttl: String,
    pub create_index: u64,
    pub modify_index: u64,
}

// -- access control --

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AclRequest {
    pub datacenter: String,
    /// `set` or `delete`
    pub op: String,
    #[serde(rename = "ACL")]
    pub acl: Acl,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Acl {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    #[serde(rename = "Type")]
    pub acl_type: String,
    pub rules: String,
    pub create_index: u64,
    pub modify_index: u64,
}

// -- tombstones --

/// Reaping of key/value tombstones up to `ReapIndex`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TombstoneRequest {
    pub datacenter: String,
    pub op: String,
    pub reap_index: u64,
    pub token: String,
}

// -- network coordinates --

/// Batch of network coordinate updates, encoded as a bare sequence
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinates(pub Vec<CoordinateUpdate>);

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CoordinateUpdate {
    pub node: String,
    pub coord: Option<Coordinate>,
}

/// Vivaldi network coordinate
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Coordinate {
    pub vec: Vec<f64>,
    pub error: f64,
    pub adjustment: f64,
    pub height: f64,
}

// -- prepared queries --

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PreparedQueryRequest {
    pub datacenter: String,
    /// `create`, `update` or `delete`
    pub op: String,
    pub query: Option<PreparedQuery>,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PreparedQuery {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub session: String,
    pub token: String,
    pub service: ServiceQuery,
    #[serde(rename = "DNS")]
    pub dns: QueryDnsOptions,
    pub create_index: u64,
    pub modify_index: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceQuery {
    pub service: String,
    pub failover: QueryDatacenterOptions,
    pub only_passing: bool,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QueryDatacenterOptions {
    pub nearest_n: i64,
    pub datacenters: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QueryDnsOptions {
    #[serde(rename = "TTL")]
    pub ttl: String,
}
