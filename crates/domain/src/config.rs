pub mod errors;
pub mod logging;
pub mod pipe;
pub mod root;
pub mod store;
pub mod zkns;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use pipe::PipeConfig;
pub use root::{CliOverrides, Config};
pub use store::{SeedNode, StoreConfig};
pub use zkns::{SoaConfig, ZknsConfig};
