#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use zkns_pdns_application::ports::StoreClient;
use zkns_pdns_domain::DomainError;

#[derive(Clone, Default)]
pub struct MockStoreClient {
    nodes: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    fetches: Arc<RwLock<Vec<String>>>,
    fetch_count: Arc<AtomicUsize>,
}

impl MockStoreClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(self, path: &str, data: &str) -> Self {
        self.set_node(path, data);
        self
    }

    pub fn set_node(&self, path: &str, data: &str) {
        self.nodes
            .write()
            .unwrap()
            .insert(path.to_string(), data.as_bytes().to_vec());
    }

    pub fn remove_node(&self, path: &str) {
        self.nodes.write().unwrap().remove(path);
    }

    pub fn set_error(&self, path: &str, error: DomainError) {
        self.errors
            .write()
            .unwrap()
            .insert(path.to_string(), error);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    pub fn fetched_paths(&self) -> Vec<String> {
        self.fetches.read().unwrap().clone()
    }
}

#[async_trait]
impl StoreClient for MockStoreClient {
    async fn fetch(&self, path: &str) -> Result<Option<Vec<u8>>, DomainError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.fetches.write().unwrap().push(path.to_string());

        if let Some(err) = self.errors.read().unwrap().get(path).cloned() {
            return Err(err);
        }

        Ok(self.nodes.read().unwrap().get(path).cloned())
    }
}
