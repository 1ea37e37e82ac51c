//! CLI routing and command dispatch.

use crate::util::env as process_env;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;

pub mod doctor;
pub mod get;
pub mod plan;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub project_root: PathBuf,
    pub config_path: PathBuf,
    pub env: HashMap<String, String>,
    pub non_interactive: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "gofr-provision",
    version,
    about = "Vault AppRole provisioning for GOFR services"
)]
pub struct Cli {
    /// Project root holding the secrets/ convention directory
    #[arg(long, global = true, value_name = "PATH", default_value = ".")]
    pub project_root: PathBuf,

    /// AppRole config file (relative paths resolve against the project root)
    #[arg(long, global = true, value_name = "PATH", default_value = crate::constants::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Run in non-interactive mode (no prompts, suitable for automation)
    #[arg(long, global = true, env = "GOFR_PROVISION_NON_INTERACTIVE")]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config_path = if self.config.is_absolute() {
            self.config.clone()
        } else {
            self.project_root.join(&self.config)
        };
        let ctx = CliContext {
            project_root: self.project_root,
            config_path,
            env: process_env::snapshot(),
            non_interactive: self.non_interactive,
        };

        match self.command {
            Commands::Plan(args) => plan::run(&ctx, args),
            Commands::Doctor => doctor::run(&ctx),
            Commands::Get(args) => get::run(&ctx, args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Preview the roles provisioning would create (dry-run)
    Plan(plan::PlanArgs),
    /// Diagnose bootstrap discovery and config readiness (read-only)
    Doctor,
    /// Output a bootstrap credential
    Get(get::GetArgs),
}
