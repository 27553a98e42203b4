//! `launchlite doctor` — diagnose the bootstrap environment.

use anyhow::Result;
use launchlite_core::config::BootstrapConfig;
use launchlite_core::manifest::{Manifest, Requirement};
use launchlite_env::{builder, interpreter};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct DoctorReport {
    base_python: Option<String>,
    venv_dir: String,
    venv_present: bool,
    venv_python: Option<String>,
    manifest: String,
    manifest_present: bool,
    requirements: Vec<Requirement>,
    stamp: Option<String>,
    dependencies_up_to_date: bool,
}

fn build_report(cfg: &BootstrapConfig) -> DoctorReport {
    let base_python = interpreter::discover_python(cfg.python.as_deref())
        .ok()
        .map(|p| p.display().to_string());
    let venv_python = interpreter::venv_python(&cfg.venv_dir);
    let stamp = builder::read_stamp(&cfg.venv_dir);

    let (manifest_present, requirements, up_to_date) = match Manifest::load(&cfg.requirements) {
        Ok(manifest) => {
            let fresh = stamp.as_deref() == Some(manifest.digest.as_str());
            (true, manifest.requirements, fresh)
        }
        Err(_) => (false, Vec::new(), false),
    };

    DoctorReport {
        base_python,
        venv_dir: cfg.venv_dir.display().to_string(),
        venv_present: venv_python.is_some(),
        venv_python: venv_python.map(|p| p.display().to_string()),
        manifest: cfg.requirements.display().to_string(),
        manifest_present,
        requirements,
        stamp,
        dependencies_up_to_date: up_to_date,
    }
}

/// `launchlite doctor`
pub fn cmd_doctor(cfg: &BootstrapConfig, json: bool) -> Result<()> {
    let report = build_report(cfg);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &report.base_python {
        Some(p) => eprintln!("✓ Base interpreter: {}", p),
        None => eprintln!("✗ No usable python3/python on PATH"),
    }
    if report.venv_present {
        eprintln!(
            "✓ Venv present: {} ({})",
            report.venv_dir,
            report.venv_python.as_deref().unwrap_or("?")
        );
    } else {
        eprintln!("✗ Venv missing: {} (run `launchlite setup`)", report.venv_dir);
    }
    if report.manifest_present {
        eprintln!(
            "✓ Manifest: {} ({} package(s))",
            report.manifest,
            report.requirements.len()
        );
        for req in &report.requirements {
            eprintln!("    • {}", req.spec);
        }
    } else {
        eprintln!("✗ Manifest missing: {}", report.manifest);
    }
    if report.dependencies_up_to_date {
        eprintln!("✓ Dependencies up to date (stamp matches manifest)");
    } else {
        eprintln!("• Dependencies not installed or manifest changed since last install");
    }

    Ok(())
}
