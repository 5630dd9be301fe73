use serde::{Deserialize, Serialize};

use crate::zone::{SoaTimers, DEFAULT_TTL, DEFAULT_ZONE_ID};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZknsConfig {
    /// Zone served by this backend, e.g. `.zkns.test.zk`.
    #[serde(default = "default_domain_suffix")]
    pub domain_suffix: String,

    /// Store node the zone is rooted at, e.g. `/zk/test/zkns`.
    #[serde(default = "default_store_root")]
    pub store_root: String,

    /// Primary nameserver host for the SOA record. Falls back to the local hostname.
    #[serde(default)]
    pub soa_hostname: Option<String>,

    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default = "default_zone_id")]
    pub zone_id: i64,
}

impl Default for ZknsConfig {
    fn default() -> Self {
        Self {
            domain_suffix: default_domain_suffix(),
            store_root: default_store_root(),
            soa_hostname: None,
            ttl: default_ttl(),
            zone_id: default_zone_id(),
        }
    }
}

/// `[soa]` section; the timers are serialized flat.
pub type SoaConfig = SoaTimers;

fn default_domain_suffix() -> String {
    ".zkns.local".to_string()
}

fn default_store_root() -> String {
    "/zk/local/zkns".to_string()
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}

fn default_zone_id() -> i64 {
    DEFAULT_ZONE_ID
}
