//! Diagnostics for bootstrap discovery and provisioning readiness.

use crate::cli::CliContext;
use crate::constants;
use crate::core::approle;
use crate::core::bootstrap::BootstrapArtifacts;
use anyhow::Result;

pub fn run(ctx: &CliContext) -> Result<()> {
    let mut ok = 0u32;
    let mut warn = 0u32;
    let mut fail = 0u32;

    println!("Doctor: {}", ctx.project_root.display());

    match ctx
        .env
        .get(constants::SHARED_SECRETS_ENV)
        .filter(|v| !v.is_empty())
    {
        Some(dir) => println!("  [INFO] {} set: {}", constants::SHARED_SECRETS_ENV, dir),
        None => println!(
            "  [INFO] {} not set (using {})",
            constants::SHARED_SECRETS_ENV,
            ctx.project_root.join(constants::SECRETS_DIR_NAME).display()
        ),
    }

    match BootstrapArtifacts::discover(&ctx.project_root, &ctx.env) {
        Some(artifacts) => {
            println!(
                "  [PASS] bootstrap secrets found: {}",
                artifacts.secrets_dir.display()
            );
            ok += 1;

            match artifacts.root_token() {
                Ok(token) if !token.is_empty() => {
                    println!("  [PASS] root token readable");
                    ok += 1;
                }
                Ok(_) => {
                    println!("  [WARN] root token file is empty");
                    warn += 1;
                }
                Err(e) => {
                    println!("  [FAIL] {}", e);
                    fail += 1;
                }
            }

            match artifacts.unseal_key() {
                Ok(key) if !key.is_empty() => {
                    println!("  [PASS] unseal key readable");
                    ok += 1;
                }
                Ok(_) => {
                    println!("  [WARN] unseal key file is empty");
                    warn += 1;
                }
                Err(e) => {
                    println!("  [FAIL] {}", e);
                    fail += 1;
                }
            }
        }
        None => {
            println!("  [FAIL] bootstrap secrets not found");
            fail += 1;
        }
    }

    if ctx.config_path.is_file() {
        match approle::load(&ctx.config_path) {
            Ok(config) => {
                println!(
                    "  [PASS] approle config ok: {} role(s) for '{}'",
                    config.roles.len(),
                    config.project
                );
                ok += 1;
            }
            Err(e) => {
                println!("  [FAIL] {}", e);
                fail += 1;
            }
        }
    } else {
        println!(
            "  [WARN] approle config missing: {}",
            ctx.config_path.display()
        );
        warn += 1;
    }

    println!();
    println!("Doctor summary: {} pass, {} warn, {} fail", ok, warn, fail);
    if fail > 0 {
        std::process::exit(1);
    }
    Ok(())
}
