use clap::{Parser, Subcommand};

/// launchlite - bootstrap a Python application: venv, pip, launch
#[derive(Parser, Debug)]
#[command(name = "launchlite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepare the environment and launch the application
    Run {
        /// Virtual environment directory (default: .venv)
        #[arg(long, value_name = "DIR")]
        venv_dir: Option<String>,

        /// Dependency manifest (default: requirements.txt)
        #[arg(long, value_name = "FILE")]
        requirements: Option<String>,

        /// Application entry point (default: main.py)
        #[arg(long, value_name = "FILE")]
        entry: Option<String>,

        /// Base interpreter for venv creation (default: python3/python from PATH)
        #[arg(long, value_name = "BIN")]
        python: Option<String>,

        /// Reinstall dependencies even when the manifest is unchanged
        #[arg(long, default_value = "false")]
        refresh: bool,

        /// Skip the pip self-upgrade step
        #[arg(long, default_value = "false")]
        skip_pip_upgrade: bool,

        /// Do not wait for Enter before exiting
        #[arg(long, default_value = "false")]
        no_pause: bool,
    },

    /// Prepare the environment without launching (venv + pip + dependencies)
    Setup {
        /// Virtual environment directory (default: .venv)
        #[arg(long, value_name = "DIR")]
        venv_dir: Option<String>,

        /// Dependency manifest (default: requirements.txt)
        #[arg(long, value_name = "FILE")]
        requirements: Option<String>,

        /// Base interpreter for venv creation (default: python3/python from PATH)
        #[arg(long, value_name = "BIN")]
        python: Option<String>,

        /// Reinstall dependencies even when the manifest is unchanged
        #[arg(long, default_value = "false")]
        refresh: bool,

        /// Remove and recreate an existing venv first
        #[arg(long, default_value = "false")]
        force: bool,

        /// Skip the pip self-upgrade step
        #[arg(long, default_value = "false")]
        skip_pip_upgrade: bool,
    },

    /// Diagnose the environment: interpreter, venv, manifest, stamp
    Doctor {
        /// Virtual environment directory (default: .venv)
        #[arg(long, value_name = "DIR")]
        venv_dir: Option<String>,

        /// Dependency manifest (default: requirements.txt)
        #[arg(long, value_name = "FILE")]
        requirements: Option<String>,

        /// Output machine-readable JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Remove the virtual environment directory
    Clean {
        /// Virtual environment directory (default: .venv)
        #[arg(long, value_name = "DIR")]
        venv_dir: Option<String>,

        /// Show what would be removed without deleting
        #[arg(long, default_value = "false")]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(long, default_value = "false")]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["launchlite", "run"]).expect("parse");
        match cli.command {
            Commands::Run {
                venv_dir,
                requirements,
                entry,
                refresh,
                no_pause,
                ..
            } => {
                assert!(venv_dir.is_none());
                assert!(requirements.is_none());
                assert!(entry.is_none());
                assert!(!refresh);
                assert!(!no_pause);
            }
            other => panic!("expected Run, got {:?}", other),
        }
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from([
            "launchlite",
            "run",
            "--venv-dir",
            "env",
            "--entry",
            "bot.py",
            "--refresh",
            "--no-pause",
        ])
        .expect("parse");
        match cli.command {
            Commands::Run {
                venv_dir,
                entry,
                refresh,
                no_pause,
                ..
            } => {
                assert_eq!(venv_dir.as_deref(), Some("env"));
                assert_eq!(entry.as_deref(), Some("bot.py"));
                assert!(refresh);
                assert!(no_pause);
            }
            other => panic!("expected Run, got {:?}", other),
        }
    }

    #[test]
    fn test_doctor_json() {
        let cli = Cli::try_parse_from(["launchlite", "doctor", "--json"]).expect("parse");
        match cli.command {
            Commands::Doctor { json, .. } => assert!(json),
            other => panic!("expected Doctor, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["launchlite", "frobnicate"]).is_err());
    }
}
