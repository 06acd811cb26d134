//! BerryLink - Berry console bridge for Tasmota devices
//!
//! BerryLink sends Berry scripts to a running Tasmota device over HTTP for
//! immediate execution, uploads them as persisted files to the device
//! filesystem, and streams the device's buffered console output. When the
//! device reports a syntax error, BerryLink points at the implicated source
//! line.

pub mod cli;
pub mod config;
pub mod device;
pub mod errors;
pub mod script;
pub mod utils;

// Re-export commonly used types
pub use errors::*;

/// BerryLink version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// BerryLink application name
pub const APP_NAME: &str = "berrylink";
