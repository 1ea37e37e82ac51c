//! Shared error types for discovery and provisioning.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for provisioning operations.
pub type Result<T> = std::result::Result<T, ProvisionError>;

/// Errors shared by bootstrap discovery, config loading, and provisioning.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Malformed or semantically invalid AppRole configuration.
    #[error("approle config {}: {message}", .path.display())]
    AppRoleConfig { path: PathBuf, message: String },

    /// Bootstrap artifacts required but not present on disk.
    #[error("bootstrap secrets not found (searched {searched})")]
    BootstrapMissing { searched: String },

    /// Secret-store operation failure reported by the driving client.
    #[error("secret store: {message}")]
    Store { message: String },

    /// Filesystem read failure.
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ProvisionError {
    /// Create a configuration error for the given config file.
    pub fn config(path: &Path, message: impl Into<String>) -> Self {
        Self::AppRoleConfig {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a secret-store error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Wrap a filesystem read failure with the path it concerned.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
