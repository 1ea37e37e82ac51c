//! Output bootstrap credentials for piping into other tooling.

use crate::cli::CliContext;
use crate::core::bootstrap::BootstrapArtifacts;
use crate::error;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use dialoguer::Password;
use zeroize::Zeroizing;

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Credential {
    /// Vault root token
    RootToken,
    /// Vault unseal key
    UnsealKey,
}

impl Credential {
    fn label(self) -> &'static str {
        match self {
            Credential::RootToken => "root token",
            Credential::UnsealKey => "unseal key",
        }
    }
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Which bootstrap credential to output
    #[arg(value_enum)]
    pub credential: Credential,
}

pub fn run(ctx: &CliContext, args: GetArgs) -> Result<()> {
    let value = resolve(ctx, args.credential)?;
    println!("{}", value.as_str());
    Ok(())
}

fn resolve(ctx: &CliContext, credential: Credential) -> Result<Zeroizing<String>> {
    if let Some(artifacts) = BootstrapArtifacts::discover(&ctx.project_root, &ctx.env) {
        return Ok(read(&artifacts, credential)?);
    }
    if ctx.non_interactive {
        // Escalate through the strict entry point so the error names the
        // searched locations.
        let artifacts = BootstrapArtifacts::require(&ctx.project_root, &ctx.env)?;
        return Ok(read(&artifacts, credential)?);
    }

    // No artifacts on disk: fall back to manual entry.
    let value = Password::new()
        .with_prompt(format!("Enter {} manually", credential.label()))
        .allow_empty_password(false)
        .interact()
        .with_context(|| format!("read {} from prompt", credential.label()))?;
    Ok(Zeroizing::new(value))
}

fn read(artifacts: &BootstrapArtifacts, credential: Credential) -> error::Result<Zeroizing<String>> {
    match credential {
        Credential::RootToken => artifacts.root_token(),
        Credential::UnsealKey => artifacts.unseal_key(),
    }
}
