use std::sync::Arc;
use tracing::{info, warn};
use zkns_pdns_application::ports::StoreClient;
use zkns_pdns_application::use_cases::LookupNameUseCase;
use zkns_pdns_domain::Config;

pub fn build_resolver(config: &Config, store: Arc<dyn StoreClient>) -> Arc<LookupNameUseCase> {
    let resolver_config = config.resolver_config(&local_hostname());

    info!(
        domain = %resolver_config.domain_suffix,
        root = %resolver_config.store_root,
        soa_hostname = %resolver_config.soa_hostname,
        "Resolver configured"
    );

    Arc::new(LookupNameUseCase::new(store, resolver_config))
}

fn local_hostname() -> String {
    match hostname::get().map(|h| h.into_string()) {
        Ok(Ok(name)) if !name.is_empty() => name,
        _ => {
            warn!("Could not determine local hostname, using localhost for SOA");
            "localhost".to_string()
        }
    }
}
