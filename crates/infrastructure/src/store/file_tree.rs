use async_trait::async_trait;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;
use zkns_pdns_application::ports::StoreClient;
use zkns_pdns_domain::DomainError;

/// Store nodes laid out as files: node `/a/b` lives at `<root_dir>/a/b`.
///
/// Directories are nodes without data.
pub struct FileTreeStore {
    root_dir: PathBuf,
}

impl FileTreeStore {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn node_path(&self, path: &str) -> Result<PathBuf, DomainError> {
        let relative = Path::new(path.trim_start_matches('/'));

        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(DomainError::InvalidStorePath(path.to_string()));
        }

        Ok(self.root_dir.join(relative))
    }
}

#[async_trait]
impl StoreClient for FileTreeStore {
    async fn fetch(&self, path: &str) -> Result<Option<Vec<u8>>, DomainError> {
        let file = self.node_path(path)?;

        let metadata = match fs::metadata(&file).await {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path, file = %file.display(), "Node file not found");
                return Ok(None);
            }
            Err(e) => {
                return Err(DomainError::StoreUnavailable(format!(
                    "Failed to stat {}: {}",
                    file.display(),
                    e
                )))
            }
        };

        if metadata.is_dir() {
            return Ok(Some(Vec::new()));
        }

        fs::read(&file).await.map(Some).map_err(|e| {
            DomainError::StoreUnavailable(format!("Failed to read {}: {}", file.display(), e))
        })
    }
}
