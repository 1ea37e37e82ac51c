//! AppRole provisioning configuration model.

use serde::Serialize;

/// Validated AppRole provisioning configuration.
///
/// Produced only by [`crate::core::approle::load`]; every field is validated
/// and defaulted at construction time, so consumers never re-validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppRoleConfig {
    pub schema_version: u64,
    pub project: String,
    pub mount_point: String,
    pub token_ttl: String,
    pub token_max_ttl: String,
    pub credentials_output_dir: String,
    pub roles: Vec<RoleEntry>,
}

/// A single AppRole to provision: a role name plus its attached policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleEntry {
    pub role_name: String,
    pub policies: Vec<String>,
}
