//! Centralized constants for artifact names, overrides, and defaults.

/// Environment variable overriding the project-relative secrets directory.
pub const SHARED_SECRETS_ENV: &str = "GOFR_SHARED_SECRETS_DIR";

/// Directory under the project root searched when no override is set.
pub const SECRETS_DIR_NAME: &str = "secrets";

/// Bootstrap artifact file holding the Vault root token.
pub const ROOT_TOKEN_FILE: &str = "vault_root_token";

/// Bootstrap artifact file holding the Vault unseal key.
pub const UNSEAL_KEY_FILE: &str = "vault_unseal_key";

/// The only AppRole config schema version this build understands.
pub const SUPPORTED_SCHEMA_VERSION: u64 = 1;

/// Default auth mount point for provisioned AppRoles.
pub const DEFAULT_MOUNT_POINT: &str = "approle";

/// Default TTL for tokens issued to provisioned roles.
pub const DEFAULT_TOKEN_TTL: &str = "1h";

/// Default maximum TTL for tokens issued to provisioned roles.
pub const DEFAULT_TOKEN_MAX_TTL: &str = "24h";

/// Default directory where generated role credentials are written.
pub const DEFAULT_CREDENTIALS_OUTPUT_DIR: &str = "secrets/service_creds";

/// Default AppRole config file name, relative to the project root.
pub const DEFAULT_CONFIG_FILE: &str = "approle_config.json";
