//! Core library surface for the Employee Manager terminal application.
//!
//! The binary is a thin shell around these modules: `db` owns the SQLite
//! store, `menu` runs the eight-action loop against any `prompt::Prompter`,
//! and `ui` supplies the ratatui implementation of that prompter.
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod menu;
pub mod models;
pub mod prompt;
pub mod ui;

/// Persistence entry points used at startup.
pub use db::{initialize, Gateway, SchemaReport};

pub use error::{AppError, AppResult, ErrorKind};

/// The menu loop and its step-level types.
pub use menu::{run_session, MenuAction, MenuController, Transition};
