//! Provisioning engine.
//!
//! Expands a validated config into per-role specs and drives a secret-store
//! client to create them. The client itself (network transport, auth) lives
//! outside this crate; only the interface it exposes is modeled here.

use crate::error::Result;
use crate::models::approle_config::AppRoleConfig;
use serde::Serialize;
use tracing::info;

/// Everything the secret store needs to create or update one AppRole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleSpec {
    pub role_name: String,
    pub policies: Vec<String>,
    pub token_ttl: String,
    pub token_max_ttl: String,
    pub mount_point: String,
}

/// Client-side interface to the secret store.
///
/// Implementations are expected to be authenticated (root token) before the
/// engine drives them.
pub trait SecretStore {
    /// Create or update an AppRole and attach its policies.
    fn ensure_role(&mut self, spec: &RoleSpec) -> Result<()>;
}

/// Expand a validated config into the role specs provisioning would apply,
/// in config order. Shared TTLs and mount point are stamped onto every role.
pub fn plan(config: &AppRoleConfig) -> Vec<RoleSpec> {
    config
        .roles
        .iter()
        .map(|role| RoleSpec {
            role_name: role.role_name.clone(),
            policies: role.policies.clone(),
            token_ttl: config.token_ttl.clone(),
            token_max_ttl: config.token_max_ttl.clone(),
            mount_point: config.mount_point.clone(),
        })
        .collect()
}

/// Provision every role in `config` against `store`, failing fast on the
/// first store error. Returns the number of roles provisioned.
pub fn apply(store: &mut dyn SecretStore, config: &AppRoleConfig) -> Result<usize> {
    let specs = plan(config);
    for spec in &specs {
        store.ensure_role(spec)?;
        info!(role = %spec.role_name, mount = %spec.mount_point, "provisioned approle");
    }
    Ok(specs.len())
}
