use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use zkns_pdns_application::ports::StoreClient;
use zkns_pdns_domain::StoreConfig;
use zkns_pdns_infrastructure::store::{FileTreeStore, HttpStoreClient, InMemoryStore};

pub fn build_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn StoreClient>> {
    let store: Arc<dyn StoreClient> = match config {
        StoreConfig::Memory { nodes } => {
            info!(backend = config.as_str(), nodes = nodes.len(), "Store ready");
            Arc::new(InMemoryStore::from_seed(nodes))
        }
        StoreConfig::File { root_dir } => {
            info!(backend = config.as_str(), root_dir = %root_dir, "Store ready");
            Arc::new(FileTreeStore::new(root_dir))
        }
        StoreConfig::Http {
            base_url,
            timeout_ms,
        } => {
            info!(backend = config.as_str(), base_url = %base_url, timeout_ms, "Store ready");
            Arc::new(HttpStoreClient::new(
                base_url,
                Duration::from_millis(*timeout_ms),
            )?)
        }
    };

    Ok(store)
}
