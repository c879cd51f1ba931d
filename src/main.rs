//! Binary entry point: load configuration, prepare the store, then hand the
//! terminal to the menu loop until the user quits.
use anyhow::{Context, Result};
use tracing::{error, info};

use employee_manager::config::Config;
use employee_manager::logging::init_logging;
use employee_manager::prompt::{Status, StatusKind};
use employee_manager::ui::{restore_terminal, setup_terminal, CrosstermKeys, TerminalPrompter};
use employee_manager::{initialize, run_session};

/// Failing to create or open the database ends the process before any menu is
/// shown. Failed table creations are only reported.
fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config)?;
    info!(data_dir = %config.data_dir.display(), "starting");

    let (gateway, report) = initialize(&config.data_dir)
        .inspect_err(|err| error!(error = %err, "failed to create database"))
        .context("failed to prepare the companydb database")?;

    let terminal = setup_terminal()?;
    let mut prompter = TerminalPrompter::new(terminal, CrosstermKeys);
    for (ok, line) in report.lines() {
        prompter.push_status(if ok { Status::info(line) } else { Status::error(line) });
    }

    let outcome = run_session(gateway, &mut prompter);

    let (mut terminal, transcript) = prompter.into_parts();
    restore_terminal(&mut terminal)?;
    if let Some(status) = transcript.closing_status(&outcome) {
        match status.kind {
            StatusKind::Info => println!("{}", status.text),
            StatusKind::Error => eprintln!("{}", status.text),
        }
    }

    outcome.context("session ended with an error")
}
