use async_trait::async_trait;
use zkns_pdns_domain::DomainError;

/// Read access to the coordination store.
///
/// Implementations must be safe to share between concurrent sessions.
/// Watches and cache refresh, if any, stay inside the implementation; a
/// caller only ever sees the data a fetch returns.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Reads the data stored at `path`.
    ///
    /// Returns `Ok(None)` when the node does not exist. Every other failure
    /// is an error.
    async fn fetch(&self, path: &str) -> Result<Option<Vec<u8>>, DomainError>;
}
