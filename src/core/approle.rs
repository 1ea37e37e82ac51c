//! AppRole configuration loading and validation.
//!
//! Single pass: parse, validate in schema order, construct. The first
//! violation fails the whole load; no partial config is ever returned.

use crate::constants;
use crate::error::{ProvisionError, Result};
use crate::models::approle_config::{AppRoleConfig, RoleEntry};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load and validate an AppRole provisioning config file.
pub fn load(config_path: &Path) -> Result<AppRoleConfig> {
    let content =
        fs::read_to_string(config_path).map_err(|e| ProvisionError::io(config_path, e))?;
    let root: Value = serde_json::from_str(&content)
        .map_err(|e| ProvisionError::config(config_path, format!("invalid JSON: {}", e)))?;
    let doc = root.as_object().ok_or_else(|| {
        ProvisionError::config(config_path, "top-level value must be an object")
    })?;

    validate_schema_version(doc, config_path)?;
    let project = required_string(doc, "project", config_path)?;
    let roles = validate_roles(doc, config_path)?;

    let config = AppRoleConfig {
        schema_version: constants::SUPPORTED_SCHEMA_VERSION,
        project,
        roles,
        mount_point: optional_string(
            doc,
            "mount_point",
            constants::DEFAULT_MOUNT_POINT,
            config_path,
        )?,
        token_ttl: optional_string(doc, "token_ttl", constants::DEFAULT_TOKEN_TTL, config_path)?,
        token_max_ttl: optional_string(
            doc,
            "token_max_ttl",
            constants::DEFAULT_TOKEN_MAX_TTL,
            config_path,
        )?,
        credentials_output_dir: optional_string(
            doc,
            "credentials_output_dir",
            constants::DEFAULT_CREDENTIALS_OUTPUT_DIR,
            config_path,
        )?,
    };
    debug!(project = %config.project, roles = config.roles.len(), "approle config loaded");
    Ok(config)
}

fn validate_schema_version(doc: &Map<String, Value>, path: &Path) -> Result<()> {
    match doc.get("schema_version") {
        None => Err(ProvisionError::config(
            path,
            "missing required field 'schema_version'",
        )),
        Some(v) if v.as_u64() == Some(constants::SUPPORTED_SCHEMA_VERSION) => Ok(()),
        Some(v) => Err(ProvisionError::config(
            path,
            format!(
                "unsupported schema_version {} (expected {})",
                v,
                constants::SUPPORTED_SCHEMA_VERSION
            ),
        )),
    }
}

fn required_string(doc: &Map<String, Value>, key: &str, path: &Path) -> Result<String> {
    match doc.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(ProvisionError::config(
            path,
            format!("'{}' must be a non-empty string", key),
        )),
    }
}

fn optional_string(
    doc: &Map<String, Value>,
    key: &str,
    default: &str,
    path: &Path,
) -> Result<String> {
    match doc.get(key) {
        None => Ok(default.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ProvisionError::config(
            path,
            format!("'{}' must be a string", key),
        )),
    }
}

fn validate_roles(doc: &Map<String, Value>, path: &Path) -> Result<Vec<RoleEntry>> {
    let entries = match doc.get("roles") {
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        Some(Value::Array(_)) => {
            return Err(ProvisionError::config(path, "'roles' must not be empty"))
        }
        Some(_) => return Err(ProvisionError::config(path, "'roles' must be an array")),
        None => {
            return Err(ProvisionError::config(
                path,
                "missing required field 'roles'",
            ))
        }
    };

    let mut roles = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let role = entry.as_object().ok_or_else(|| {
            ProvisionError::config(path, format!("roles[{}] must be an object", idx))
        })?;
        let role_name = match role.get("role_name") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
            _ => {
                return Err(ProvisionError::config(
                    path,
                    format!("roles[{}]: 'role_name' must be a non-empty string", idx),
                ))
            }
        };
        let policies = match role.get("policies") {
            Some(Value::Array(policies)) if !policies.is_empty() => policies,
            _ => {
                return Err(ProvisionError::config(
                    path,
                    format!(
                        "roles[{}] ('{}'): 'policies' must be a non-empty array",
                        idx, role_name
                    ),
                ))
            }
        };
        let mut names = Vec::with_capacity(policies.len());
        for (pidx, policy) in policies.iter().enumerate() {
            match policy {
                Value::String(s) if !s.trim().is_empty() => names.push(s.clone()),
                _ => {
                    return Err(ProvisionError::config(
                        path,
                        format!(
                            "roles[{}] ('{}'): policies[{}] must be a non-empty string",
                            idx, role_name, pidx
                        ),
                    ))
                }
            }
        }
        roles.push(RoleEntry {
            role_name,
            policies: names,
        });
    }
    Ok(roles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_json(json: &str) -> Result<AppRoleConfig> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("approle_config.json");
        fs::write(&path, json).unwrap();
        load(&path)
    }

    fn error_message(json: &str) -> String {
        let err = load_json(json).unwrap_err();
        assert!(matches!(err, ProvisionError::AppRoleConfig { .. }));
        err.to_string()
    }

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config = load_json(
            r#"{"schema_version":1,"project":"gofr-dig",
                "roles":[{"role_name":"gofr-dig","policies":["gofr-dig-policy"]}]}"#,
        )
        .unwrap();

        assert_eq!(config.schema_version, 1);
        assert_eq!(config.project, "gofr-dig");
        assert_eq!(config.mount_point, "approle");
        assert_eq!(config.token_ttl, "1h");
        assert_eq!(config.token_max_ttl, "24h");
        assert_eq!(config.credentials_output_dir, "secrets/service_creds");
        assert_eq!(config.roles.len(), 1);
        assert_eq!(config.roles[0].role_name, "gofr-dig");
        assert_eq!(config.roles[0].policies, vec!["gofr-dig-policy"]);
    }

    #[test]
    fn test_explicit_fields_round_trip() {
        let config = load_json(
            r#"{"schema_version":1,"project":"billing","mount_point":"approle-int",
                "token_ttl":"30m","token_max_ttl":"12h",
                "credentials_output_dir":"out/creds",
                "roles":[{"role_name":"billing-api","policies":["read","write"]}]}"#,
        )
        .unwrap();

        assert_eq!(config.mount_point, "approle-int");
        assert_eq!(config.token_ttl, "30m");
        assert_eq!(config.token_max_ttl, "12h");
        assert_eq!(config.credentials_output_dir, "out/creds");
        assert_eq!(config.roles[0].policies, vec!["read", "write"]);
    }

    #[test]
    fn test_role_and_policy_order_preserved() {
        let config = load_json(
            r#"{"schema_version":1,"project":"p","roles":[
                {"role_name":"b","policies":["z","a"]},
                {"role_name":"a","policies":["m"]}]}"#,
        )
        .unwrap();

        let names: Vec<_> = config.roles.iter().map(|r| r.role_name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(config.roles[0].policies, vec!["z", "a"]);
    }

    #[test]
    fn test_empty_document_reports_schema_version() {
        assert!(error_message("{}").contains("schema_version"));
    }

    #[test]
    fn test_wrong_schema_version() {
        assert!(error_message(r#"{"schema_version":2,"project":"p","roles":[]}"#)
            .contains("unsupported schema_version 2"));
    }

    #[test]
    fn test_string_schema_version_rejected() {
        assert!(error_message(r#"{"schema_version":"1","project":"p","roles":[]}"#)
            .contains("unsupported schema_version"));
    }

    #[test]
    fn test_schema_version_checked_before_project() {
        // Violations short-circuit in schema order.
        assert!(error_message(r#"{"roles":[]}"#).contains("schema_version"));
    }

    #[test]
    fn test_missing_project() {
        assert!(error_message(r#"{"schema_version":1,"roles":[]}"#).contains("'project'"));
    }

    #[test]
    fn test_blank_project() {
        assert!(error_message(r#"{"schema_version":1,"project":"   ","roles":[]}"#)
            .contains("'project'"));
    }

    #[test]
    fn test_empty_roles() {
        assert!(error_message(r#"{"schema_version":1,"project":"x","roles":[]}"#)
            .contains("'roles' must not be empty"));
    }

    #[test]
    fn test_missing_roles() {
        assert!(
            error_message(r#"{"schema_version":1,"project":"x"}"#).contains("'roles'")
        );
    }

    #[test]
    fn test_roles_not_an_array() {
        assert!(error_message(r#"{"schema_version":1,"project":"x","roles":{}}"#)
            .contains("'roles' must be an array"));
    }

    #[test]
    fn test_role_missing_name() {
        assert!(error_message(
            r#"{"schema_version":1,"project":"x","roles":[{"policies":["p"]}]}"#
        )
        .contains("roles[0]"));
    }

    #[test]
    fn test_role_empty_policies() {
        assert!(error_message(
            r#"{"schema_version":1,"project":"x",
                "roles":[{"role_name":"r","policies":[]}]}"#
        )
        .contains("'policies' must be a non-empty array"));
    }

    #[test]
    fn test_blank_policy_entry() {
        assert!(error_message(
            r#"{"schema_version":1,"project":"x",
                "roles":[{"role_name":"r","policies":["ok",""]}]}"#
        )
        .contains("policies[1]"));
    }

    #[test]
    fn test_second_role_invalid_fails_whole_load() {
        assert!(error_message(
            r#"{"schema_version":1,"project":"x","roles":[
                {"role_name":"ok","policies":["p"]},
                {"role_name":"","policies":["p"]}]}"#
        )
        .contains("roles[1]"));
    }

    #[test]
    fn test_optional_field_wrong_type() {
        assert!(error_message(
            r#"{"schema_version":1,"project":"x","mount_point":5,
                "roles":[{"role_name":"r","policies":["p"]}]}"#
        )
        .contains("'mount_point' must be a string"));
    }

    #[test]
    fn test_array_root_rejected() {
        assert!(error_message("[]").contains("object"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(error_message("{not json").contains("invalid JSON"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ProvisionError::Io { .. }));
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("approle_config.json");
        fs::write(
            &path,
            r#"{"schema_version":1,"project":"p",
                "roles":[{"role_name":"r","policies":["p1"]}]}"#,
        )
        .unwrap();

        assert_eq!(load(&path).unwrap(), load(&path).unwrap());
    }
}
