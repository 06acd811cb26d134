//! Error types for BerryLink

pub mod types;

pub use types::*;
