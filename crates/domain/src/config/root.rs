use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::pipe::PipeConfig;
use super::store::StoreConfig;
use super::zkns::{SoaConfig, ZknsConfig};
use crate::zone::ResolverConfig;

/// Main configuration structure for zkns-pdns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Pipe protocol settings (banner, listen address)
    #[serde(default)]
    pub pipe: PipeConfig,

    /// Served zone and its store root
    #[serde(default)]
    pub zkns: ZknsConfig,

    /// SOA timers
    #[serde(default)]
    pub soa: SoaConfig,

    /// Coordination store backend
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zkns-pdns.toml in current directory
    /// 3. /etc/zkns-pdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(suffix) = overrides.domain_suffix {
            self.zkns.domain_suffix = suffix;
        }
        if let Some(root) = overrides.store_root {
            self.zkns.store_root = root;
        }
        if let Some(host) = overrides.soa_hostname {
            self.zkns.soa_hostname = Some(host);
        }
        if let Some(listen) = overrides.listen {
            self.pipe.listen = Some(listen);
        }
        if let Some(root_dir) = overrides.store_dir {
            self.store = StoreConfig::File { root_dir };
        } else if let Some(base_url) = overrides.store_url {
            let timeout_ms = match &self.store {
                StoreConfig::Http { timeout_ms, .. } => *timeout_ms,
                _ => 2000,
            };
            self.store = StoreConfig::Http {
                base_url,
                timeout_ms,
            };
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zkns.domain_suffix.trim_matches('.').is_empty() {
            return Err(ConfigError::Validation(
                "Domain suffix cannot be empty".to_string(),
            ));
        }

        if !self.zkns.store_root.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "Store root '{}' must be an absolute path",
                self.zkns.store_root
            )));
        }

        if self.pipe.banner.is_empty() || self.pipe.banner.contains(['\t', '\n']) {
            return Err(ConfigError::Validation(
                "Banner must be a non-empty single field".to_string(),
            ));
        }

        match &self.store {
            StoreConfig::File { root_dir } if root_dir.is_empty() => {
                return Err(ConfigError::Validation(
                    "File store needs a root_dir".to_string(),
                ));
            }
            StoreConfig::Http { base_url, .. } if base_url.is_empty() => {
                return Err(ConfigError::Validation(
                    "HTTP store needs a base_url".to_string(),
                ));
            }
            StoreConfig::Memory { nodes } => {
                if let Some(node) = nodes.iter().find(|n| !n.path.starts_with('/')) {
                    return Err(ConfigError::Validation(format!(
                        "Seed node path '{}' must be absolute",
                        node.path
                    )));
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Builds the resolver settings, using `fallback_soa_hostname` when none is configured.
    pub fn resolver_config(&self, fallback_soa_hostname: &str) -> ResolverConfig {
        let soa_hostname = self
            .zkns
            .soa_hostname
            .as_deref()
            .unwrap_or(fallback_soa_hostname);

        ResolverConfig::new(
            soa_hostname,
            self.zkns.domain_suffix.as_str(),
            self.zkns.store_root.as_str(),
        )
        .with_ttl(self.zkns.ttl)
        .with_zone_id(self.zkns.zone_id)
        .with_soa_timers(self.soa)
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("zkns-pdns.toml").exists() {
            Some("zkns-pdns.toml".to_string())
        } else if std::path::Path::new("/etc/zkns-pdns/config.toml").exists() {
            Some("/etc/zkns-pdns/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub domain_suffix: Option<String>,
    pub store_root: Option<String>,
    pub soa_hostname: Option<String>,
    pub listen: Option<String>,
    pub store_dir: Option<String>,
    pub store_url: Option<String>,
    pub log_level: Option<String>,
}
