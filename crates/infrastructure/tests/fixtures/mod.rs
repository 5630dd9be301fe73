#![allow(dead_code)]

use std::sync::Arc;
use zkns_pdns_application::use_cases::LookupNameUseCase;
use zkns_pdns_domain::ResolverConfig;
use zkns_pdns_infrastructure::pipe::{PipeSession, SessionFactory};
use zkns_pdns_infrastructure::store::InMemoryStore;

pub const SUFFIX: &str = ".zkns.test.zk";
pub const ROOT: &str = "/zk/test/zkns";
pub const SOA_HOST: &str = "ns1.test.zk";
pub const BANNER: &str = "zkns2pdns";

pub const FAKE_SRV: &str = r#"{
"Entries": [
  {
    "host": "test1",
    "named_port_map": {"_http":8080}
  },
  {
    "host": "test2",
    "named_port_map": {"_http":8080}
  }
]}"#;

pub const FAKE_CNAME: &str = r#"{
"Entries": [
  {
    "host": "test1"
  }
]}"#;

pub const FAKE_A: &str = r#"{
"Entries": [
  {
    "ipv4": "0.0.0.1"
  }
]}"#;

pub const TEST_SOA: &str = "DATA\t.zkns.test.zk.\tIN\tSOA\t1\t1\tns1.test.zk. hostmaster.ns1.test.zk. 0 1800 600 3600 300\n";

pub fn fixture_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    store.put("/zk/test/zkns/srv", FAKE_SRV);
    store.put("/zk/test/zkns/cname", FAKE_CNAME);
    store.put("/zk/test/zkns/a", FAKE_A);
    store
}

pub fn resolver(store: &InMemoryStore) -> Arc<LookupNameUseCase> {
    Arc::new(LookupNameUseCase::new(
        Arc::new(store.clone()),
        ResolverConfig::new(SOA_HOST, SUFFIX, ROOT),
    ))
}

pub fn session(store: &InMemoryStore) -> PipeSession {
    PipeSession::new(resolver(store), BANNER)
}

pub fn factory(store: &InMemoryStore) -> SessionFactory {
    SessionFactory::new(resolver(store), BANNER)
}

/// Feeds `input` to a fresh session and returns everything it wrote.
pub async fn run_session(store: &InMemoryStore, input: &str) -> String {
    run_session_bytes(store, input.as_bytes()).await
}

pub async fn run_session_bytes(store: &InMemoryStore, input: &[u8]) -> String {
    let mut out: Vec<u8> = Vec::new();
    session(store).serve(input, &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}
