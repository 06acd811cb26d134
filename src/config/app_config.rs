//! Application configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{BerryLinkError, Result};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Device related configuration
    pub device: DeviceConfig,
}

/// Device related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Default device address, e.g. "http://192.168.1.50"
    pub address: Option<String>,
    /// Enable the console output poll loop
    pub output_polling: bool,
    /// Restart the Berry VM after a successful upload
    pub reset_vm_after_upload: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            address: None,
            output_polling: true,
            reset_vm_after_upload: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the first location that exists: an explicit
    /// path, `./berrylink.toml`, then the user config dir. Falls back to
    /// defaults when no file is found.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        for candidate in Self::candidate_paths() {
            if candidate.exists() {
                log::debug!("loading config from {}", candidate.display());
                return Self::from_file(&candidate);
            }
        }
        Ok(Self::default())
    }

    /// Parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| {
            BerryLinkError::Serialization(format!("{}: {}", path.display(), e))
        })
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("berrylink.toml")];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("berrylink").join("config.toml"));
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_polling_only() {
        let config = AppConfig::default();
        assert_eq!(config.device.address, None);
        assert!(config.device.output_polling);
        assert!(!config.device.reset_vm_after_upload);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [device]
            address = "http://192.168.1.50"
            "#,
        )
        .unwrap();
        assert_eq!(config.device.address.as_deref(), Some("http://192.168.1.50"));
        assert!(config.device.output_polling);
        assert!(!config.device.reset_vm_after_upload);
    }
}
