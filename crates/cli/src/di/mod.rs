mod store;
mod use_cases;

pub use store::build_store;
pub use use_cases::build_resolver;
