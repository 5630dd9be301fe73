//! Record codec: stored JSON documents in, pipe answer lines out.
//!
//! A store node holds a document shaped like
//!
//! ```json
//! {"Entries": [{"host": "web1", "named_port_map": {"_http": 8080}}]}
//! ```
//!
//! Each entry is classified by the fields it carries. A service entry has
//! both `host` and `named_port_map`, an alias entry has `host` alone and an
//! address entry has `ipv4` alone. Service wins over alias, alias over
//! address.

use crate::dns_record::{AnswerLine, RecordType};
use crate::errors::DomainError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::Ipv4Addr;

pub const SRV_PRIORITY: u16 = 0;
pub const SRV_WEIGHT: u16 = 0;

/// One decoded document entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedEntry {
    Address {
        ipv4: Ipv4Addr,
    },
    Alias {
        host: String,
    },
    Service {
        host: String,
        named_port_map: BTreeMap<String, u16>,
    },
}

impl TypedEntry {
    pub fn kind(&self) -> &'static str {
        match self {
            TypedEntry::Address { .. } => "address",
            TypedEntry::Alias { .. } => "alias",
            TypedEntry::Service { .. } => "service",
        }
    }

    pub fn port(&self, name: &str) -> Option<u16> {
        match self {
            TypedEntry::Service { named_port_map, .. } => named_port_map.get(name).copied(),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StoredDocument {
    #[serde(rename = "Entries", alias = "entries", default)]
    entries: Option<Vec<RawEntry>>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    host: Option<String>,

    #[serde(default)]
    ipv4: Option<String>,

    #[serde(default)]
    named_port_map: Option<BTreeMap<String, u16>>,
}

/// Decodes a stored document into its entries, keeping document order.
///
/// Empty node data decodes to no entries.
pub fn decode_document(data: &[u8]) -> Result<Vec<TypedEntry>, DomainError> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let document: StoredDocument = serde_json::from_slice(data)
        .map_err(|e| DomainError::StoreDecode(format!("invalid JSON: {}", e)))?;

    document
        .entries
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, raw)| classify(index, raw))
        .collect()
}

fn classify(index: usize, raw: RawEntry) -> Result<TypedEntry, DomainError> {
    // Empty strings count as missing fields.
    let host = raw.host.filter(|h| !h.is_empty());
    let ipv4 = raw.ipv4.filter(|a| !a.is_empty());

    match (host, raw.named_port_map, ipv4) {
        (Some(host), Some(named_port_map), _) => {
            if let Some(bad) = named_port_map.keys().find(|k| !k.starts_with('_')) {
                return Err(DomainError::StoreDecode(format!(
                    "entry {}: port name '{}' must start with '_'",
                    index, bad
                )));
            }
            Ok(TypedEntry::Service {
                host,
                named_port_map,
            })
        }
        (Some(host), None, _) => Ok(TypedEntry::Alias { host }),
        (None, None, Some(addr)) => addr
            .parse::<Ipv4Addr>()
            .map(|ipv4| TypedEntry::Address { ipv4 })
            .map_err(|_| {
                DomainError::StoreDecode(format!("entry {}: invalid ipv4 '{}'", index, addr))
            }),
        _ => Err(DomainError::StoreDecode(format!(
            "entry {}: expected one of ipv4, host or host with named_port_map",
            index
        ))),
    }
}

/// What a single query asks of the codec.
#[derive(Debug, Clone, Copy)]
pub struct AnswerRequest<'a> {
    pub qname: &'a str,

    /// `None` for query types this backend cannot answer.
    pub qtype: Option<RecordType>,

    /// Service-port selector taken from the leading `_` label.
    pub port_name: Option<&'a str>,

    pub ttl: u32,

    pub zone_id: i64,
}

/// Encodes one entry as an answer line for the given request.
///
/// Entries that do not fit the request produce nothing. With a port
/// selector only service entries declaring that port answer, as SRV.
/// Without one, addresses answer as A and hosts as CNAME.
pub fn encode_answer(request: &AnswerRequest<'_>, entry: &TypedEntry) -> Option<AnswerLine> {
    let (record_type, content) = match (request.port_name, entry) {
        (Some(port_name), TypedEntry::Service { host, .. }) => {
            let port = entry.port(port_name)?;
            (
                RecordType::SRV,
                format!("{}\t{} {} {}", SRV_PRIORITY, SRV_WEIGHT, port, host),
            )
        }
        (Some(_), _) => return None,
        (None, TypedEntry::Address { ipv4 }) => (RecordType::A, ipv4.to_string()),
        (None, TypedEntry::Alias { host }) | (None, TypedEntry::Service { host, .. }) => {
            (RecordType::CNAME, host.clone())
        }
    };

    if !request.qtype?.admits(record_type) {
        return None;
    }

    Some(AnswerLine::new(
        request.qname,
        record_type,
        request.ttl,
        request.zone_id,
        content,
    ))
}
