//! Ratatui front-end: a [`Prompter`](crate::prompt::Prompter) that draws each
//! question full-screen and keeps the latest table and status lines visible
//! above it.

mod forms;
mod helpers;
mod prompter;
mod screens;
mod terminal;

pub use prompter::TerminalPrompter;
pub use screens::Transcript;
pub use terminal::{restore_terminal, setup_terminal, CrosstermKeys, CrosstermTerminal, KeySource};
