mod lookup_name;

pub use lookup_name::{LookupAnswer, LookupNameUseCase};
