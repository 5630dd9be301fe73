#![allow(dead_code)]

mod mock_store;

pub use mock_store::MockStoreClient;

pub const SUFFIX: &str = ".zkns.test.zk";
pub const ROOT: &str = "/zk/test/zkns";
pub const SOA_HOST: &str = "ns1.test.zk";

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

/// Store holding the `srv`, `cname` and `a` nodes under [`ROOT`].
pub fn fixture_store() -> MockStoreClient {
    MockStoreClient::new()
        .with_node("/zk/test/zkns/srv", FAKE_SRV)
        .with_node("/zk/test/zkns/cname", FAKE_CNAME)
        .with_node("/zk/test/zkns/a", FAKE_A)
}
