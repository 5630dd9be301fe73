//! Text framing of the nameserver pipe protocol.
//!
//! Lines are tab separated and newline terminated. The peer opens with
//! `HELO\t<abi-version>`, then sends one `Q` line per question. Every
//! question is answered either by `DATA` lines closed with `END`, or by a
//! single `FAIL`.

use crate::dns_record::{AnswerLine, RecordType};
use crate::errors::DomainError;
use std::fmt;
use std::sync::Arc;

pub const HANDSHAKE_TAG: &str = "HELO";
pub const QUERY_TAG: &str = "Q";

/// Number of tab-separated fields after the `Q` tag.
pub const QUERY_FIELDS: usize = 6;

/// Parses a `HELO\t<version>` line and returns the ABI version.
pub fn parse_handshake(line: &str) -> Result<u32, DomainError> {
    let mut fields = line.split('\t');

    if fields.next() != Some(HANDSHAKE_TAG) {
        return Err(DomainError::ProtocolSyntax(format!(
            "expected handshake, got '{}'",
            line
        )));
    }

    let version = fields
        .next()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DomainError::ProtocolSyntax("handshake without version".to_string()))?;

    if fields.next().is_some() {
        return Err(DomainError::ProtocolSyntax(format!(
            "unexpected fields after handshake version in '{}'",
            line
        )));
    }

    version
        .parse::<u32>()
        .map_err(|_| DomainError::ProtocolSyntax(format!("invalid ABI version '{}'", version)))
}

/// One question from the nameserver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeQuery {
    pub name: Arc<str>,

    pub class: Arc<str>,

    /// Query type exactly as sent; see [`PipeQuery::record_type`].
    pub qtype: Arc<str>,

    pub id: i64,

    pub remote_addr: Arc<str>,

    pub local_addr: Arc<str>,
}

impl PipeQuery {
    pub fn new(name: impl Into<Arc<str>>, qtype: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            class: "IN".into(),
            qtype: qtype.into(),
            id: -1,
            remote_addr: "0.0.0.0".into(),
            local_addr: "0.0.0.0".into(),
        }
    }

    /// Parses `Q\tqname\tqclass\tqtype\tid\tremote-ip\tlocal-ip`.
    ///
    /// Fields past the sixth (ABI 3 sends EDNS subnet data) are ignored.
    pub fn parse(line: &str) -> Result<Self, DomainError> {
        let fields: Vec<&str> = line.split('\t').collect();

        if fields.first() != Some(&QUERY_TAG) {
            return Err(DomainError::ProtocolSyntax(format!(
                "expected query, got '{}'",
                line
            )));
        }

        if fields.len() < QUERY_FIELDS + 1 {
            return Err(DomainError::ProtocolSyntax(format!(
                "query has {} fields, expected {}",
                fields.len() - 1,
                QUERY_FIELDS
            )));
        }

        if fields[1].is_empty() {
            return Err(DomainError::ProtocolSyntax("empty query name".to_string()));
        }

        let id = fields[4]
            .parse::<i64>()
            .map_err(|_| DomainError::ProtocolSyntax(format!("invalid query id '{}'", fields[4])))?;

        Ok(Self {
            name: fields[1].into(),
            class: fields[2].into(),
            qtype: fields[3].into(),
            id,
            remote_addr: fields[5].into(),
            local_addr: fields[6].into(),
        })
    }

    /// `None` when the query type is not one this backend knows.
    pub fn record_type(&self) -> Option<RecordType> {
        self.qtype.parse().ok()
    }
}

/// One line written back to the nameserver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipeResponse {
    Banner(Arc<str>),
    Data(AnswerLine),
    End,
    Fail,
}

impl fmt::Display for PipeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipeResponse::Banner(banner) => write!(f, "OK\t{}", banner),
            PipeResponse::Data(line) => write!(f, "{}", line),
            PipeResponse::End => write!(f, "END"),
            PipeResponse::Fail => write!(f, "FAIL"),
        }
    }
}
