mod cli;
mod commands;
mod observability;

use clap::Parser;
use cli::{Cli, Commands};
use launchlite_core::config::BootstrapConfig;
use std::io::{self, BufRead, IsTerminal, Write};

fn main() {
    observability::init_tracing();
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Run {
            venv_dir,
            requirements,
            entry,
            python,
            refresh,
            skip_pip_upgrade,
            no_pause,
        } => {
            let cfg = BootstrapConfig::from_env().with_cli_overrides(
                venv_dir.as_deref(),
                requirements.as_deref(),
                entry.as_deref(),
                python.as_deref(),
            );
            let pause = !no_pause && !cfg.no_pause;

            // The pause runs whether the pipeline succeeded or not, like the
            // original launcher's final prompt.
            let code = match commands::run::cmd_run(&cfg, refresh, skip_pip_upgrade) {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("✗ {:#}", e);
                    1
                }
            };
            if pause {
                pause_for_ack();
            }
            code
        }
        Commands::Setup {
            venv_dir,
            requirements,
            python,
            refresh,
            force,
            skip_pip_upgrade,
        } => {
            let cfg = BootstrapConfig::from_env().with_cli_overrides(
                venv_dir.as_deref(),
                requirements.as_deref(),
                None,
                python.as_deref(),
            );
            report(commands::setup::cmd_setup(&cfg, refresh, force, skip_pip_upgrade))
        }
        Commands::Doctor {
            venv_dir,
            requirements,
            json,
        } => {
            let cfg = BootstrapConfig::from_env().with_cli_overrides(
                venv_dir.as_deref(),
                requirements.as_deref(),
                None,
                None,
            );
            report(commands::doctor::cmd_doctor(&cfg, json))
        }
        Commands::Clean {
            venv_dir,
            dry_run,
            force,
        } => {
            let cfg = BootstrapConfig::from_env().with_cli_overrides(
                venv_dir.as_deref(),
                None,
                None,
                None,
            );
            report(commands::clean::cmd_clean(&cfg, dry_run, force))
        }
    };

    std::process::exit(code);
}

fn report(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("✗ {:#}", e);
            1
        }
    }
}

/// Final acknowledgment before the window closes. Skipped when stdin is not
/// a terminal (CI, pipes).
fn pause_for_ack() {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return;
    }
    eprint!("Press Enter to exit...");
    let _ = io::stderr().flush();
    let mut line = String::new();
    let _ = stdin.lock().read_line(&mut line);
}
