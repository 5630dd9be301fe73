use serde::{Deserialize, Serialize};

/// Backing coordination store.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreConfig {
    /// Process-local tree, optionally seeded from the config file.
    Memory {
        #[serde(default)]
        nodes: Vec<SeedNode>,
    },

    /// Node data read from files under `root_dir`, one file per node.
    File { root_dir: String },

    /// Node data fetched with `GET <base_url><path>`.
    Http {
        base_url: String,

        #[serde(default = "default_timeout_ms")]
        timeout_ms: u64,
    },
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Memory { nodes: Vec::new() }
    }
}

impl StoreConfig {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory { .. } => "memory",
            Self::File { .. } => "file",
            Self::Http { .. } => "http",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SeedNode {
    pub path: String,

    pub data: String,
}

fn default_timeout_ms() -> u64 {
    2000
}
