//! Vault AppRole provisioning for GOFR services.
//!
//! Discovers the bootstrap artifacts (root token, unseal key) a freshly
//! initialized Vault instance leaves on disk, and loads the declarative
//! AppRole configuration describing which roles to provision.
//!
//! ## Modules
//! - `cli` — Command-line handlers
//! - `core` — Business logic (bootstrap discovery, config loading, provisioning)
//! - `models` — Data structures
//! - `util` — Process environment and filesystem helpers

pub mod cli;
pub mod constants;
pub mod core;
pub mod error;
pub mod models;
pub mod util;
