//! Custom error types for BerryLink

use std::fmt;

/// Main error type for BerryLink operations
#[derive(Debug)]
pub enum BerryLinkError {
    /// Configuration related errors (missing or invalid device address)
    Config(String),
    /// Command invoked without a script buffer to act on
    NoActiveBuffer,
    /// Upload attempted on a file outside the workspace root
    NoWorkspace(String),
    /// Network/HTTP failures against the device
    Transport(String),
    /// General I/O errors
    Io(std::io::Error),
    /// Serialization errors
    Serialization(String),
}

impl fmt::Display for BerryLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BerryLinkError::Config(msg) => write!(f, "Configuration error: {}", msg),
            BerryLinkError::NoActiveBuffer => write!(f, "No script buffer to act on"),
            BerryLinkError::NoWorkspace(msg) => write!(f, "Workspace error: {}", msg),
            BerryLinkError::Transport(msg) => write!(f, "Device transport error: {}", msg),
            BerryLinkError::Io(err) => write!(f, "I/O error: {}", err),
            BerryLinkError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for BerryLinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BerryLinkError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BerryLinkError {
    fn from(err: std::io::Error) -> Self {
        BerryLinkError::Io(err)
    }
}

impl From<reqwest::Error> for BerryLinkError {
    fn from(err: reqwest::Error) -> Self {
        BerryLinkError::Transport(err.to_string())
    }
}

impl From<toml::de::Error> for BerryLinkError {
    fn from(err: toml::de::Error) -> Self {
        BerryLinkError::Serialization(err.to_string())
    }
}

/// Result type alias for BerryLink operations
pub type Result<T> = std::result::Result<T, BerryLinkError>;
