pub mod pipe;
pub mod store;
