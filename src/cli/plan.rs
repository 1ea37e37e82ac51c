//! Dry-run preview of the provisioning plan.

use crate::cli::CliContext;
use crate::core::bootstrap::BootstrapArtifacts;
use crate::core::{approle, provision};
use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Output format (text|json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn run(ctx: &CliContext, args: PlanArgs) -> Result<()> {
    let config = approle::load(&ctx.config_path)
        .with_context(|| format!("load approle config {}", ctx.config_path.display()))?;
    let specs = provision::plan(&config);
    let artifacts = BootstrapArtifacts::discover(&ctx.project_root, &ctx.env);

    if args.format == "json" {
        let plan = serde_json::json!({
            "action": "provision",
            "project": config.project,
            "mount_point": config.mount_point,
            "credentials_output_dir": config.credentials_output_dir,
            "bootstrap_secrets": artifacts.as_ref().map(|a| a.secrets_dir.display().to_string()),
            "roles": specs,
        });
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "Plan: provision {} role(s) for project '{}'",
        specs.len(),
        config.project
    );
    match &artifacts {
        Some(a) => println!("  bootstrap secrets: {}", a.secrets_dir.display()),
        None => println!("  bootstrap secrets: not found (run doctor for details)"),
    }
    println!("  credentials output: {}", config.credentials_output_dir);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Role").add_attribute(Attribute::Bold),
        Cell::new("Policies").add_attribute(Attribute::Bold),
        Cell::new("TTL").add_attribute(Attribute::Bold),
        Cell::new("Max TTL").add_attribute(Attribute::Bold),
        Cell::new("Mount").add_attribute(Attribute::Bold),
    ]);
    for spec in &specs {
        table.add_row(vec![
            spec.role_name.clone(),
            spec.policies.join(","),
            spec.token_ttl.clone(),
            spec.token_max_ttl.clone(),
            spec.mount_point.clone(),
        ]);
    }
    println!("{}", table);
    println!("\nNo changes made (dry-run).");
    Ok(())
}
