//! `launchlite setup` — prepare the environment without launching.
//!
//! Also hosts the shared bootstrap pipeline used by `run`: ensure venv,
//! upgrade pip, install dependencies.

use anyhow::{Context, Result};
use launchlite_core::config::BootstrapConfig;
use launchlite_core::manifest::Manifest;
use launchlite_env::builder::{self, InstallOutcome};
use std::path::PathBuf;

/// Steps 1-4 of the bootstrap sequence. Returns the venv directory.
///
/// A missing or unreadable manifest is reported and skipped rather than
/// aborting; the launcher never branches on dependency-step failures.
pub fn prepare_environment(
    cfg: &BootstrapConfig,
    refresh: bool,
    skip_pip_upgrade: bool,
) -> Result<PathBuf> {
    let env_dir = builder::ensure_environment(cfg)?;

    if !skip_pip_upgrade {
        builder::upgrade_installer(&env_dir)?;
    }

    match Manifest::load(&cfg.requirements) {
        Ok(manifest) => {
            match builder::install_dependencies(&env_dir, &cfg.requirements, &manifest, refresh)? {
                InstallOutcome::Installed => {
                    eprintln!(
                        "✓ Installed {} package(s) from {}",
                        manifest.requirements.len(),
                        cfg.requirements.display()
                    );
                }
                InstallOutcome::UpToDate => {
                    eprintln!("✓ Dependencies up to date ({})", cfg.requirements.display());
                }
                InstallOutcome::NothingToInstall => {
                    eprintln!("• No packages listed in {}", cfg.requirements.display());
                }
                InstallOutcome::Failed => {
                    eprintln!("⚠ pip install failed — see log output above");
                }
            }
        }
        Err(e) => {
            tracing::warn!("dependency manifest unavailable: {:#}", e);
            eprintln!("⚠ Skipping dependency install: {:#}", e);
        }
    }

    Ok(env_dir)
}

/// `launchlite setup`
pub fn cmd_setup(
    cfg: &BootstrapConfig,
    refresh: bool,
    force: bool,
    skip_pip_upgrade: bool,
) -> Result<()> {
    if force && cfg.venv_dir.exists() {
        eprintln!("• Removing existing venv at {}", cfg.venv_dir.display());
        std::fs::remove_dir_all(&cfg.venv_dir)
            .with_context(|| format!("Remove venv {}", cfg.venv_dir.display()))?;
    }

    let env_dir = prepare_environment(cfg, refresh || force, skip_pip_upgrade)?;
    eprintln!("✓ Environment ready at {}", env_dir.display());
    Ok(())
}
