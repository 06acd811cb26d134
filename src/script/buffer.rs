//! Script buffer loading

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::errors::Result;

/// The script text being worked on plus its backing file, if any.
#[derive(Debug, Clone)]
pub struct ScriptBuffer {
    /// Full script text
    pub text: String,
    /// Backing file, absent for stdin or in-memory buffers
    pub path: Option<PathBuf>,
}

impl ScriptBuffer {
    /// Build an in-memory buffer with no backing file
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            path: None,
        }
    }

    /// Read a buffer from a file, or from stdin when the path is `-`.
    pub fn open(path: &Path) -> Result<Self> {
        if path == Path::new("-") {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            return Ok(Self { text, path: None });
        }
        let text = std::fs::read_to_string(path)?;
        // Canonical path so workspace-relative resolution is stable
        let path = path.canonicalize()?;
        Ok(Self {
            text,
            path: Some(path),
        })
    }
}
