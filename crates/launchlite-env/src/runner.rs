//! Application launch: venv activation expressed as a child-process
//! environment, plus the synchronous run of the entry point.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::interpreter;

/// Forces the pure-Python protobuf implementation in the child app
/// (required for gevent-patched runtimes).
pub const PROTOBUF_IMPL_KEY: &str = "PROTOCOL_BUFFERS_PYTHON_IMPLEMENTATION";
pub const PROTOBUF_IMPL_VALUE: &str = "python";

/// Resolved runtime for launching the application.
#[derive(Debug, Clone)]
pub struct RuntimePaths {
    /// The venv's interpreter
    pub python: PathBuf,
    /// The venv directory itself
    pub env_dir: PathBuf,
}

impl RuntimePaths {
    /// Resolve from a built venv directory.
    pub fn from_env_dir(env_dir: &Path) -> Result<Self> {
        let python = interpreter::venv_python(env_dir)
            .with_context(|| format!("No interpreter in venv {}", env_dir.display()))?;
        Ok(Self {
            python,
            env_dir: env_dir.to_path_buf(),
        })
    }
}

/// The environment variables that stand in for `activate`: the venv's bin
/// dir first on PATH, `VIRTUAL_ENV` set, and the protobuf runtime flag.
/// (`PYTHONHOME` is removed separately at the `Command` level.)
pub fn activation_env(env_dir: &Path, current_path: Option<&str>) -> Vec<(String, String)> {
    let bin_dir = interpreter::venv_bin_dir(env_dir);
    let path_value = match current_path {
        Some(rest) if !rest.is_empty() => {
            format!("{}{}{}", bin_dir.display(), path_separator(), rest)
        }
        _ => bin_dir.display().to_string(),
    };
    vec![
        ("PATH".to_string(), path_value),
        (
            "VIRTUAL_ENV".to_string(),
            env_dir.display().to_string(),
        ),
        (PROTOBUF_IMPL_KEY.to_string(), PROTOBUF_IMPL_VALUE.to_string()),
    ]
}

fn path_separator() -> char {
    if cfg!(windows) {
        ';'
    } else {
        ':'
    }
}

/// Run the entry point with the venv interpreter, inherited stdio, and the
/// activation environment. Blocks until the application exits and returns
/// its exit code (-1 when terminated by signal).
pub fn launch_application(paths: &RuntimePaths, entry: &Path) -> Result<i32> {
    let mut cmd = Command::new(&paths.python);
    cmd.arg(entry);
    for (key, value) in activation_env(&paths.env_dir, std::env::var("PATH").ok().as_deref()) {
        cmd.env(key, value);
    }
    cmd.env_remove("PYTHONHOME");

    tracing::info!(
        python = %paths.python.display(),
        entry = %entry.display(),
        "launching application"
    );
    let status = cmd
        .status()
        .with_context(|| format!("Launch {}", entry.display()))?;
    let code = status.code().unwrap_or(-1);
    tracing::info!(exit_code = code, "application exited");
    Ok(code)
}
