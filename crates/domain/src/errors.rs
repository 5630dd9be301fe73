use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed pipe line: {0}")]
    ProtocolSyntax(String),

    #[error("Query name outside served domain: {0}")]
    DomainMismatch(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Malformed store document: {0}")]
    StoreDecode(String),

    #[error("Invalid store path: {0}")]
    InvalidStorePath(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Errors raised by the store or its documents, as opposed to the query itself.
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            DomainError::StoreUnavailable(_) | DomainError::StoreDecode(_)
        )
    }
}
