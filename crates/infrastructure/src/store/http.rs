use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;
use zkns_pdns_application::ports::StoreClient;
use zkns_pdns_domain::DomainError;

/// Reads nodes through an HTTP gateway in front of the store.
///
/// `GET <base_url><path>` answers 200 with the node data or 404 when the
/// node does not exist.
pub struct HttpStoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStoreClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::StoreUnavailable(format!("HTTP client setup: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn node_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl StoreClient for HttpStoreClient {
    async fn fetch(&self, path: &str) -> Result<Option<Vec<u8>>, DomainError> {
        let url = self.node_url(path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::StoreUnavailable(format!("GET {}: {}", url, e)))?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!(url = %url, "Node not found");
                Ok(None)
            }
            status if status.is_success() => response
                .bytes()
                .await
                .map(|body| Some(body.to_vec()))
                .map_err(|e| DomainError::StoreUnavailable(format!("read {}: {}", url, e))),
            status => Err(DomainError::StoreUnavailable(format!(
                "HTTP {} for {}",
                status.as_u16(),
                url
            ))),
        }
    }
}
