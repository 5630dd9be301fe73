use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipeConfig {
    /// Identifier sent back in the `OK` handshake line.
    #[serde(default = "default_banner")]
    pub banner: String,

    /// TCP address to accept pipe sessions on. Stdin/stdout when unset.
    #[serde(default)]
    pub listen: Option<String>,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            banner: default_banner(),
            listen: None,
        }
    }
}

fn default_banner() -> String {
    "zkns2pdns".to_string()
}
