pub mod dns;

pub use dns::{LookupAnswer, LookupNameUseCase};
