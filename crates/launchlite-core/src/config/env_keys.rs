//! Environment variable key constants.
//!
//! Primary variables use the `LAUNCHLITE_*` prefix.

/// Bootstrap paths and interpreter selection
pub mod bootstrap {
    /// Virtual environment directory (default: `.venv`)
    pub const LAUNCHLITE_VENV_DIR: &str = "LAUNCHLITE_VENV_DIR";
    pub const VENV_DIR_ALIASES: &[&str] = &["VIRTUAL_ENV_DIR"];

    /// Dependency manifest path (default: `requirements.txt`)
    pub const LAUNCHLITE_REQUIREMENTS: &str = "LAUNCHLITE_REQUIREMENTS";

    /// Application entry point (default: `main.py`)
    pub const LAUNCHLITE_ENTRY: &str = "LAUNCHLITE_ENTRY";

    /// Base interpreter override (otherwise `python3`/`python` from PATH)
    pub const LAUNCHLITE_PYTHON: &str = "LAUNCHLITE_PYTHON";

    /// Skip the final "Press Enter" pause
    pub const LAUNCHLITE_NO_PAUSE: &str = "LAUNCHLITE_NO_PAUSE";
}

/// Observability and logging
pub mod observability {
    pub const LAUNCHLITE_QUIET: &str = "LAUNCHLITE_QUIET";

    pub const LAUNCHLITE_LOG_LEVEL: &str = "LAUNCHLITE_LOG_LEVEL";

    pub const LAUNCHLITE_LOG_JSON: &str = "LAUNCHLITE_LOG_JSON";
}
