//! Bootstrap artifact discovery.
//!
//! Locates the directory holding the root token and unseal key written when
//! a Vault instance is first initialized, honoring the shared-secrets
//! override before the project-relative convention.

use crate::constants;
use crate::error::{ProvisionError, Result};
use crate::util::fs as secret_fs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

/// Read-only handle to a directory holding both bootstrap artifact files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapArtifacts {
    pub secrets_dir: PathBuf,
}

impl BootstrapArtifacts {
    /// Locate bootstrap secrets for `project_root`, best-effort.
    ///
    /// A non-empty `GOFR_SHARED_SECRETS_DIR` entry in `env` names the one
    /// candidate directory; otherwise `<project_root>/secrets` is the
    /// candidate. Returns `None` when the candidate is missing either
    /// artifact file; absence is a normal outcome, not an error.
    pub fn discover(project_root: &Path, env: &HashMap<String, String>) -> Option<Self> {
        let candidate = match override_dir(env) {
            Some(dir) => {
                debug!(dir = %dir.display(), "using shared secrets override");
                dir
            }
            None => project_root.join(constants::SECRETS_DIR_NAME),
        };
        if !has_artifacts(&candidate) {
            debug!(dir = %candidate.display(), "bootstrap artifacts not present");
            return None;
        }
        Some(Self {
            secrets_dir: candidate,
        })
    }

    /// Strict variant of [`Self::discover`]: absence becomes an error naming
    /// every searched location.
    pub fn require(project_root: &Path, env: &HashMap<String, String>) -> Result<Self> {
        Self::discover(project_root, env).ok_or_else(|| {
            let default_dir = project_root.join(constants::SECRETS_DIR_NAME);
            let searched = match override_dir(env) {
                Some(over) => format!(
                    "{} from {}, {}",
                    over.display(),
                    constants::SHARED_SECRETS_ENV,
                    default_dir.display()
                ),
                None => default_dir.display().to_string(),
            };
            ProvisionError::BootstrapMissing { searched }
        })
    }

    /// Read the Vault root token, surrounding whitespace stripped.
    ///
    /// A file deleted after discovery surfaces as a read error naming the
    /// path; the window between the existence check and the read is
    /// tolerated as a reportable condition.
    pub fn root_token(&self) -> Result<Zeroizing<String>> {
        secret_fs::read_secret_file(&self.secrets_dir.join(constants::ROOT_TOKEN_FILE))
    }

    /// Read the Vault unseal key, surrounding whitespace stripped.
    pub fn unseal_key(&self) -> Result<Zeroizing<String>> {
        secret_fs::read_secret_file(&self.secrets_dir.join(constants::UNSEAL_KEY_FILE))
    }
}

fn override_dir(env: &HashMap<String, String>) -> Option<PathBuf> {
    env.get(constants::SHARED_SECRETS_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn has_artifacts(dir: &Path) -> bool {
    dir.is_dir()
        && dir.join(constants::ROOT_TOKEN_FILE).is_file()
        && dir.join(constants::UNSEAL_KEY_FILE).is_file()
}
