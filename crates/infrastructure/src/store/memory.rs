use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use zkns_pdns_application::ports::StoreClient;
use zkns_pdns_domain::config::SeedNode;
use zkns_pdns_domain::DomainError;

use super::normalize_path;

/// Process-local node tree.
///
/// Clones share the same nodes, so a writer holding one clone is seen by
/// every resolver holding another on its next fetch.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    nodes: Arc<DashMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(nodes: &[SeedNode]) -> Self {
        let store = Self::new();
        for node in nodes {
            store.put(&node.path, node.data.as_bytes());
        }
        store
    }

    pub fn put(&self, path: &str, data: impl Into<Vec<u8>>) {
        self.nodes.insert(normalize_path(path).to_string(), data.into());
    }

    pub fn remove(&self, path: &str) -> bool {
        self.nodes.remove(normalize_path(path)).is_some()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[async_trait]
impl StoreClient for InMemoryStore {
    async fn fetch(&self, path: &str) -> Result<Option<Vec<u8>>, DomainError> {
        Ok(self
            .nodes
            .get(normalize_path(path))
            .map(|entry| entry.value().clone()))
    }
}
