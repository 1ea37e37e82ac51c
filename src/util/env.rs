//! Process environment snapshots.
//!
//! Discovery takes the environment as an explicit mapping, keeping it
//! deterministic and testable; this is the one place the process
//! environment is read.

use std::collections::HashMap;
use std::env;

/// Snapshot the current process environment into a plain mapping.
pub fn snapshot() -> HashMap<String, String> {
    env::vars().collect()
}
