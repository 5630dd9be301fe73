use crate::dns_record::{AnswerLine, RecordType};
use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_TTL: u32 = 1;
pub const DEFAULT_ZONE_ID: i64 = 1;

/// Timers carried in the synthesized SOA record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SoaTimers {
    #[serde(default)]
    pub serial: u32,

    #[serde(default = "default_refresh")]
    pub refresh: u32,

    #[serde(default = "default_retry")]
    pub retry: u32,

    #[serde(default = "default_expire")]
    pub expire: u32,

    #[serde(default = "default_minimum")]
    pub minimum: u32,
}

impl Default for SoaTimers {
    fn default() -> Self {
        Self {
            serial: 0,
            refresh: default_refresh(),
            retry: default_retry(),
            expire: default_expire(),
            minimum: default_minimum(),
        }
    }
}

fn default_refresh() -> u32 {
    1800
}

fn default_retry() -> u32 {
    600
}

fn default_expire() -> u32 {
    3600
}

fn default_minimum() -> u32 {
    300
}

/// Where a query name points inside the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMapping {
    /// Leading `_` label, if the query selects a service port.
    pub port_name: Option<String>,

    /// The store root itself when the query names the zone apex.
    pub store_path: String,
}

/// Immutable settings of one naming resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub domain_suffix: Arc<str>,

    pub store_root: Arc<str>,

    pub soa_hostname: Arc<str>,

    pub ttl: u32,

    pub zone_id: i64,

    pub soa: SoaTimers,
}

impl ResolverConfig {
    pub fn new(
        soa_hostname: impl Into<Arc<str>>,
        domain_suffix: impl Into<Arc<str>>,
        store_root: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            domain_suffix: domain_suffix.into(),
            store_root: store_root.into(),
            soa_hostname: soa_hostname.into(),
            ttl: DEFAULT_TTL,
            zone_id: DEFAULT_ZONE_ID,
            soa: SoaTimers::default(),
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_zone_id(mut self, zone_id: i64) -> Self {
        self.zone_id = zone_id;
        self
    }

    pub fn with_soa_timers(mut self, soa: SoaTimers) -> Self {
        self.soa = soa;
        self
    }

    /// Maps a query name to its store path.
    ///
    /// The suffix is matched label by label, ignoring case and a trailing
    /// dot on the query name. Relative labels keep their order and case.
    pub fn map_name(&self, qname: &str) -> Result<NameMapping, DomainError> {
        let name = qname.strip_suffix('.').unwrap_or(qname);
        let labels: Vec<&str> = name.split('.').collect();
        let suffix: Vec<&str> = self
            .domain_suffix
            .trim_matches('.')
            .split('.')
            .filter(|l| !l.is_empty())
            .collect();

        if suffix.is_empty() || labels.len() < suffix.len() {
            return Err(DomainError::DomainMismatch(qname.to_string()));
        }

        let split = labels.len() - suffix.len();
        let matches = labels[split..]
            .iter()
            .zip(&suffix)
            .all(|(label, expected)| label.eq_ignore_ascii_case(expected));
        if !matches {
            return Err(DomainError::DomainMismatch(qname.to_string()));
        }

        let mut relative = &labels[..split];
        if relative.iter().any(|l| l.is_empty() || l.contains('/')) {
            return Err(DomainError::InvalidStorePath(qname.to_string()));
        }

        let port_name = match relative.first() {
            Some(first) if first.starts_with('_') => {
                relative = &relative[1..];
                Some(first.to_string())
            }
            _ => None,
        };

        Ok(NameMapping {
            port_name,
            store_path: self.store_path(relative),
        })
    }

    fn store_path(&self, labels: &[&str]) -> String {
        let root = self.store_root.trim_end_matches('/');
        if labels.is_empty() {
            if root.is_empty() {
                "/".to_string()
            } else {
                root.to_string()
            }
        } else {
            format!("{}/{}", root, labels.join("/"))
        }
    }

    /// The SOA line that opens every answered query.
    pub fn soa_answer(&self) -> AnswerLine {
        let zone = format!("{}.", self.domain_suffix.trim_end_matches('.'));
        let host = self.soa_hostname.trim_end_matches('.');
        let content = format!(
            "{host}. hostmaster.{host}. {} {} {} {} {}",
            self.soa.serial, self.soa.refresh, self.soa.retry, self.soa.expire, self.soa.minimum,
        );

        AnswerLine::new(zone, RecordType::SOA, self.ttl, self.zone_id, content)
    }
}
