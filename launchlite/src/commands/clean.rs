//! `launchlite clean` — remove the virtual environment directory.

use anyhow::{Context, Result};
use launchlite_core::config::BootstrapConfig;
use std::fs;
use std::path::Path;

/// `launchlite clean`
pub fn cmd_clean(cfg: &BootstrapConfig, dry_run: bool, force: bool) -> Result<()> {
    let venv_dir = &cfg.venv_dir;

    if !venv_dir.exists() {
        eprintln!("No virtual environment at {}", venv_dir.display());
        return Ok(());
    }

    let size = dir_size(venv_dir);
    eprintln!(
        "🗂  Virtual environment at {} ({})",
        venv_dir.display(),
        format_size(size)
    );

    if dry_run {
        eprintln!("(Dry run — nothing removed. Remove --dry-run to delete.)");
        return Ok(());
    }

    if !force {
        eprint!("Remove it? [y/N] ");
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    fs::remove_dir_all(venv_dir)
        .with_context(|| format!("Remove venv {}", venv_dir.display()))?;
    eprintln!("✓ Removed {}, freed {}", venv_dir.display(), format_size(size));
    Ok(())
}

/// Compute total size of a directory recursively.
fn dir_size(path: &Path) -> u64 {
    let mut total: u64 = 0;
    if let Ok(entries) = fs::read_dir(path) {
        for entry in entries.flatten() {
            let p = entry.path();
            if p.is_dir() {
                total += dir_size(&p);
            } else if let Ok(meta) = entry.metadata() {
                total += meta.len();
            }
        }
    }
    total
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
