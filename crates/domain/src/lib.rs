//! zkns-pdns Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod pipe_protocol;
pub mod record_codec;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError, StoreConfig};
pub use dns_record::{AnswerLine, RecordType};
pub use errors::DomainError;
pub use pipe_protocol::{parse_handshake, PipeQuery, PipeResponse};
pub use record_codec::{decode_document, encode_answer, AnswerRequest, TypedEntry};
pub use zone::{NameMapping, ResolverConfig, SoaTimers};
