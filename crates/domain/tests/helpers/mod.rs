pub mod builders;

pub use builders::DocumentBuilder;
