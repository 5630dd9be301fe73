#![allow(dead_code)]
use serde_json::{json, Map, Value};

/// Builds stored documents in the `{"Entries": [...]}` layout.
pub struct DocumentBuilder {
    entries: Vec<Value>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn address(mut self, ipv4: &str) -> Self {
        self.entries.push(json!({ "ipv4": ipv4 }));
        self
    }

    pub fn alias(mut self, host: &str) -> Self {
        self.entries.push(json!({ "host": host }));
        self
    }

    pub fn service(mut self, host: &str, ports: &[(&str, u16)]) -> Self {
        let mut map = Map::new();
        for (name, port) in ports {
            map.insert((*name).to_string(), json!(port));
        }
        self.entries
            .push(json!({ "host": host, "named_port_map": Value::Object(map) }));
        self
    }

    pub fn raw(mut self, entry: Value) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> Vec<u8> {
        serde_json::to_vec(&json!({ "Entries": self.entries })).unwrap()
    }
}
