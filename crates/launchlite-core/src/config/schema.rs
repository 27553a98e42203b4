//! Configuration structs grouped by domain, loaded from environment variables.

use std::path::PathBuf;

use super::env_keys::{bootstrap as boot_keys, observability as obv_keys};
use super::loader::{env_bool, env_optional, env_or};

/// Bootstrap paths: venv directory, manifest, entry point, interpreter override.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Virtual environment directory
    pub venv_dir: PathBuf,
    /// Dependency manifest (requirements.txt)
    pub requirements: PathBuf,
    /// Application entry point
    pub entry: PathBuf,
    /// Base interpreter override; `None` means discover from PATH
    pub python: Option<PathBuf>,
    /// Skip the final acknowledgment pause
    pub no_pause: bool,
}

impl BootstrapConfig {
    /// Load from environment (loads `.env` first, no-overwrite).
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        Self {
            venv_dir: PathBuf::from(env_or(
                boot_keys::LAUNCHLITE_VENV_DIR,
                boot_keys::VENV_DIR_ALIASES,
                || ".venv".to_string(),
            )),
            requirements: PathBuf::from(env_or(
                boot_keys::LAUNCHLITE_REQUIREMENTS,
                &[],
                || "requirements.txt".to_string(),
            )),
            entry: PathBuf::from(env_or(boot_keys::LAUNCHLITE_ENTRY, &[], || {
                "main.py".to_string()
            })),
            python: env_optional(boot_keys::LAUNCHLITE_PYTHON, &[]).map(PathBuf::from),
            no_pause: env_bool(boot_keys::LAUNCHLITE_NO_PAUSE, &[], false),
        }
    }

    /// Apply CLI overrides on top of env-derived values.
    pub fn with_cli_overrides(
        mut self,
        venv_dir: Option<&str>,
        requirements: Option<&str>,
        entry: Option<&str>,
        python: Option<&str>,
    ) -> Self {
        if let Some(d) = venv_dir {
            self.venv_dir = PathBuf::from(d);
        }
        if let Some(r) = requirements {
            self.requirements = PathBuf::from(r);
        }
        if let Some(e) = entry {
            self.entry = PathBuf::from(e);
        }
        if let Some(p) = python {
            self.python = Some(PathBuf::from(p));
        }
        self
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        Self {
            quiet: env_bool(obv_keys::LAUNCHLITE_QUIET, &[], false),
            log_level: env_or(obv_keys::LAUNCHLITE_LOG_LEVEL, &[], || {
                "launchlite=info".to_string()
            }),
            log_json: env_bool(obv_keys::LAUNCHLITE_LOG_JSON, &[], false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_take_precedence() {
        let cfg = BootstrapConfig {
            venv_dir: PathBuf::from(".venv"),
            requirements: PathBuf::from("requirements.txt"),
            entry: PathBuf::from("main.py"),
            python: None,
            no_pause: false,
        };
        let cfg = cfg.with_cli_overrides(
            Some("env"),
            None,
            Some("app.py"),
            Some("/usr/bin/python3.12"),
        );
        assert_eq!(cfg.venv_dir, PathBuf::from("env"));
        assert_eq!(cfg.requirements, PathBuf::from("requirements.txt"));
        assert_eq!(cfg.entry, PathBuf::from("app.py"));
        assert_eq!(cfg.python, Some(PathBuf::from("/usr/bin/python3.12")));
    }
}
