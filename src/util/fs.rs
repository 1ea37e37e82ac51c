use crate::error::{ProvisionError, Result};
use std::fs;
use std::path::Path;
use zeroize::Zeroizing;

/// Read a single-value secret file, stripping surrounding whitespace.
pub fn read_secret_file(path: &Path) -> Result<Zeroizing<String>> {
    let raw = Zeroizing::new(fs::read_to_string(path).map_err(|e| ProvisionError::io(path, e))?);
    Ok(Zeroizing::new(raw.trim().to_string()))
}
