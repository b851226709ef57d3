pub mod engine;
pub mod error;
pub mod reporter;
pub mod reports;
