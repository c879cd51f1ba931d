use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".employee-manager";
/// Log file written next to the database.
const LOG_FILE_NAME: &str = "employee-manager.log";

/// Command-line flags. Each one falls back to an environment variable, and a
/// `.env` file is loaded before parsing so either source works.
#[derive(Debug, Parser)]
#[command(name = "employee-manager", version, about = "Manage departments, roles and employees")]
pub struct Cli {
    /// Directory holding the database and the log file
    #[arg(long, env = "EMPLOYEE_MANAGER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// tracing filter directive, e.g. `info` or `employee_manager=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_filter: String,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let data_dir = match cli.data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Ok(Self {
            data_dir,
            log_filter: cli.log_filter,
        })
    }

    /// Load `.env` if present, then parse the process arguments.
    pub fn load() -> Result<Self> {
        // A missing .env file is the normal case.
        let _ = dotenvy::dotenv();
        Self::from_cli(Cli::parse())
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir_wins() {
        let cli = Cli::try_parse_from([
            "employee-manager",
            "--data-dir",
            "/tmp/company",
            "--log-filter",
            "debug",
        ])
        .unwrap();

        let config = Config::from_cli(cli).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/company"));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(
            config.log_path(),
            PathBuf::from("/tmp/company/employee-manager.log")
        );
    }
}
