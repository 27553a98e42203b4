//! `launchlite run` — full bootstrap sequence, then launch the application.

use anyhow::Result;
use launchlite_core::config::BootstrapConfig;
use launchlite_env::runner::{self, RuntimePaths};

use super::setup;

/// Prepare the environment and run the entry point to completion.
/// Returns the application's exit code.
pub fn cmd_run(cfg: &BootstrapConfig, refresh: bool, skip_pip_upgrade: bool) -> Result<i32> {
    let env_dir = setup::prepare_environment(cfg, refresh, skip_pip_upgrade)?;
    let paths = RuntimePaths::from_env_dir(&env_dir)?;
    runner::launch_application(&paths, &cfg.entry)
}
