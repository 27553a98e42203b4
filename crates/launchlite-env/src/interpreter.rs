//! Base Python interpreter discovery.

use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpreterError {
    #[error("python3 or python not found in PATH")]
    NotFound,
    #[error("interpreter {0} failed the version probe")]
    ProbeFailed(PathBuf),
}

/// Find a usable base interpreter: the explicit override if given, otherwise
/// `python3` then `python` from PATH, each probed with `--version`.
pub fn discover_python(override_path: Option<&Path>) -> Result<PathBuf, InterpreterError> {
    if let Some(path) = override_path {
        if probe(path) {
            return Ok(path.to_path_buf());
        }
        return Err(InterpreterError::ProbeFailed(path.to_path_buf()));
    }
    for name in ["python3", "python"] {
        if let Ok(path) = which::which(name) {
            if probe(&path) {
                return Ok(path);
            }
        }
    }
    Err(InterpreterError::NotFound)
}

fn probe(path: &Path) -> bool {
    Command::new(path)
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// The venv's own interpreter, if the venv has been created.
/// Checks `bin/python` (unix layout) then `Scripts/python.exe` (windows).
pub fn venv_python(env_dir: &Path) -> Option<PathBuf> {
    let unix = env_dir.join("bin").join("python");
    if unix.exists() {
        return Some(unix);
    }
    let windows = env_dir.join("Scripts").join("python.exe");
    if windows.exists() {
        return Some(windows);
    }
    None
}

/// The venv's executable directory, for PATH activation.
pub fn venv_bin_dir(env_dir: &Path) -> PathBuf {
    let scripts = env_dir.join("Scripts");
    if scripts.exists() {
        scripts
    } else {
        env_dir.join("bin")
    }
}
