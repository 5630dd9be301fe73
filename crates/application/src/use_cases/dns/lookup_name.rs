use crate::ports::StoreClient;
use std::sync::Arc;
use tracing::debug;
use zkns_pdns_domain::{
    decode_document, encode_answer, AnswerLine, AnswerRequest, DomainError, PipeQuery,
    PipeResponse, ResolverConfig,
};

/// Answer to a query inside the served zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupAnswer {
    pub soa: AnswerLine,

    /// Data lines in document order; may be empty.
    pub lines: Vec<AnswerLine>,
}

impl LookupAnswer {
    /// SOA first, then the data lines, then `END`.
    pub fn into_responses(self) -> Vec<PipeResponse> {
        let mut responses = Vec::with_capacity(self.lines.len() + 2);
        responses.push(PipeResponse::Data(self.soa));
        responses.extend(self.lines.into_iter().map(PipeResponse::Data));
        responses.push(PipeResponse::End);
        responses
    }
}

/// Naming resolver: turns a pipe query into store reads and answer lines.
///
/// Holds no state between calls. Every lookup inside the zone costs exactly
/// one store fetch; the zone apex reads the store root.
pub struct LookupNameUseCase {
    store: Arc<dyn StoreClient>,
    config: ResolverConfig,
}

impl LookupNameUseCase {
    pub fn new(store: Arc<dyn StoreClient>, config: ResolverConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub async fn execute(&self, query: &PipeQuery) -> Result<LookupAnswer, DomainError> {
        let mapping = self.config.map_name(&query.name)?;
        let soa = self.config.soa_answer();

        // A missing node is an empty document.
        let data = match self.store.fetch(&mapping.store_path).await {
            Ok(Some(data)) => data,
            Ok(None) => {
                debug!(path = %mapping.store_path, "Store node absent");
                Vec::new()
            }
            Err(e) if e.is_store_error() => return Err(e),
            Err(e) => return Err(DomainError::StoreUnavailable(e.to_string())),
        };

        let entries = decode_document(&data)?;

        let request = AnswerRequest {
            qname: &query.name,
            qtype: query.record_type(),
            port_name: mapping.port_name.as_deref(),
            ttl: self.config.ttl,
            zone_id: self.config.zone_id,
        };

        let lines: Vec<AnswerLine> = entries
            .iter()
            .filter_map(|entry| encode_answer(&request, entry))
            .collect();

        debug!(
            qname = %query.name,
            qtype = %query.qtype,
            path = %mapping.store_path,
            port = ?mapping.port_name,
            entries = entries.len(),
            answers = lines.len(),
            "Lookup resolved"
        );

        Ok(LookupAnswer { soa, lines })
    }
}
