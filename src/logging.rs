use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Route `tracing` output to the log file in the data directory. The terminal
/// belongs to the full-screen UI, so nothing is written to stdout or stderr.
pub fn init_logging(config: &Config) -> Result<()> {
    fs::create_dir_all(&config.data_dir).context("failed to create data directory")?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())
        .context("failed to open log file")?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter `{}`", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
