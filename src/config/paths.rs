//! Path management for costwise
//!
//! Resolves where the snapshot file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `COSTWISE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/costwise` or `~/.config/costwise`
//! 3. Windows: `%APPDATA%\costwise`

use std::path::PathBuf;

use crate::error::CostwiseError;

/// Manages all paths used by costwise
#[derive(Debug, Clone)]
pub struct CostwisePaths {
    base_dir: PathBuf,
}

impl CostwisePaths {
    /// Create a new CostwisePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CostwiseError> {
        let base_dir = if let Ok(custom) = std::env::var("COSTWISE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CostwisePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/costwise/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the snapshot file holding profile and expenses
    pub fn snapshot_file(&self) -> PathBuf {
        self.base_dir.join("costs.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CostwiseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CostwiseError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CostwiseError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| CostwiseError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("costwise"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CostwiseError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CostwiseError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("costwise"))
}
