//! Build the isolated Python environment: venv creation, pip upgrade,
//! dependency installation with an install stamp.

use anyhow::{Context, Result};
use launchlite_core::config::BootstrapConfig;
use launchlite_core::manifest::Manifest;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::interpreter;

/// Stamp file written inside the venv after a successful install.
/// Holds the manifest digest; a matching digest skips reinstallation.
pub const STAMP_FILE: &str = ".launchlite.stamp";

/// Outcome of the dependency installation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// pip ran and exited zero
    Installed,
    /// Stamp digest matched the manifest; pip not invoked
    UpToDate,
    /// Manifest listed no requirements; pip not invoked
    NothingToInstall,
    /// pip exited non-zero (logged, not fatal — exit codes are not inspected
    /// beyond reporting, matching the launcher's original behavior)
    Failed,
}

/// Ensure the venv exists; create it with `python -m venv` when absent.
/// Idempotent: an existing venv (interpreter present) is left untouched.
pub fn ensure_environment(cfg: &BootstrapConfig) -> Result<PathBuf> {
    let env_dir = cfg.venv_dir.clone();

    if interpreter::venv_python(&env_dir).is_some() {
        tracing::debug!(venv = %env_dir.display(), "venv already present, skipping creation");
        return Ok(env_dir);
    }

    let base_python = interpreter::discover_python(cfg.python.as_deref())?;
    tracing::info!(
        venv = %env_dir.display(),
        python = %base_python.display(),
        "creating virtual environment"
    );

    let out = Command::new(&base_python)
        .arg("-m")
        .arg("venv")
        .arg(&env_dir)
        .output()
        .context("Create venv")?;
    if !out.status.success() {
        anyhow::bail!("venv failed: {}", String::from_utf8_lossy(&out.stderr));
    }

    Ok(env_dir)
}

/// Upgrade pip inside the venv. A non-zero exit is logged and swallowed;
/// installation can still proceed with the bundled pip.
pub fn upgrade_installer(env_dir: &Path) -> Result<()> {
    let python = interpreter::venv_python(env_dir)
        .with_context(|| format!("No interpreter in venv {}", env_dir.display()))?;

    let out = Command::new(&python)
        .args(["-m", "pip", "install", "--upgrade", "pip"])
        .output()
        .context("Upgrade pip")?;
    if !out.status.success() {
        tracing::warn!(
            "pip self-upgrade failed: {}",
            String::from_utf8_lossy(&out.stderr).trim()
        );
    }
    Ok(())
}

/// Install the manifest's packages into the venv with
/// `python -m pip install --upgrade -r <manifest>`.
///
/// When the stamp digest matches and `refresh` is false, pip is skipped.
/// A non-zero pip exit yields [`InstallOutcome::Failed`] without an error
/// and without updating the stamp.
pub fn install_dependencies(
    env_dir: &Path,
    manifest_path: &Path,
    manifest: &Manifest,
    refresh: bool,
) -> Result<InstallOutcome> {
    if manifest.requirements.is_empty() {
        tracing::info!(manifest = %manifest_path.display(), "manifest lists no packages");
        return Ok(InstallOutcome::NothingToInstall);
    }

    if !refresh && read_stamp(env_dir).as_deref() == Some(manifest.digest.as_str()) {
        tracing::info!("dependencies unchanged since last install, skipping");
        return Ok(InstallOutcome::UpToDate);
    }

    let python = interpreter::venv_python(env_dir)
        .with_context(|| format!("No interpreter in venv {}", env_dir.display()))?;

    tracing::info!(
        manifest = %manifest_path.display(),
        packages = manifest.requirements.len(),
        "installing dependencies"
    );
    let out = Command::new(&python)
        .args(["-m", "pip", "install", "--upgrade", "-r"])
        .arg(manifest_path)
        .output()
        .context("pip install")?;
    if !out.status.success() {
        tracing::warn!(
            "pip install failed: {}",
            String::from_utf8_lossy(&out.stderr).trim()
        );
        return Ok(InstallOutcome::Failed);
    }

    write_stamp(env_dir, &manifest.digest)?;
    Ok(InstallOutcome::Installed)
}

/// Read the stamp digest, if any.
pub fn read_stamp(env_dir: &Path) -> Option<String> {
    std::fs::read_to_string(env_dir.join(STAMP_FILE))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn write_stamp(env_dir: &Path, digest: &str) -> Result<()> {
    std::fs::write(env_dir.join(STAMP_FILE), digest).context("Write install stamp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchlite_core::manifest::parse_requirements;

    fn fake_venv(dir: &Path) {
        std::fs::create_dir_all(dir.join("bin")).expect("mkdir");
        std::fs::write(dir.join("bin").join("python"), "").expect("touch");
    }

    #[test]
    fn test_stamp_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(read_stamp(dir.path()), None);
        write_stamp(dir.path(), "abc123").expect("write");
        assert_eq!(read_stamp(dir.path()).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_ensure_environment_idempotent_when_present() {
        let dir = tempfile::tempdir().expect("tempdir");
        let venv = dir.path().join(".venv");
        fake_venv(&venv);

        // Interpreter override points nowhere runnable; an existing venv
        // must short-circuit before discovery is attempted.
        let cfg = BootstrapConfig {
            venv_dir: venv.clone(),
            requirements: dir.path().join("requirements.txt"),
            entry: dir.path().join("main.py"),
            python: Some(dir.path().join("no-such-python")),
            no_pause: true,
        };
        let got = ensure_environment(&cfg).expect("existing venv accepted");
        assert_eq!(got, venv);
    }

    #[test]
    fn test_install_skips_empty_manifest() {
        let dir = tempfile::tempdir().expect("tempdir");
        let venv = dir.path().join(".venv");
        fake_venv(&venv);

        let manifest = Manifest {
            requirements: parse_requirements("# nothing\n"),
            digest: launchlite_core::manifest::digest_of(&[]),
        };
        let outcome = install_dependencies(&venv, &dir.path().join("requirements.txt"), &manifest, false)
            .expect("no pip needed");
        assert_eq!(outcome, InstallOutcome::NothingToInstall);
    }

    #[test]
    fn test_install_skips_when_stamp_matches() {
        let dir = tempfile::tempdir().expect("tempdir");
        let venv = dir.path().join(".venv");
        fake_venv(&venv);

        let reqs = parse_requirements("requests>=2.31\n");
        let digest = launchlite_core::manifest::digest_of(&reqs);
        write_stamp(&venv, &digest).expect("stamp");

        let manifest = Manifest {
            requirements: reqs,
            digest,
        };
        let outcome = install_dependencies(&venv, &dir.path().join("requirements.txt"), &manifest, false)
            .expect("stamp match");
        assert_eq!(outcome, InstallOutcome::UpToDate);
    }
}
