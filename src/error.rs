//! Error taxonomy shared by the store layer, the prompts, and the menu loop.
//! Every failure carries an [`ErrorKind`] so callers can decide whether the
//! session survives without inspecting message text.

use rusqlite::{Error as SqlError, ErrorCode};
use thiserror::Error;

/// Coarse failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    StoreConnection,
    Constraint,
    Query,
    NotFound,
    Validation,
    PromptIo,
    Interrupted,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not reach the database: {0}")]
    StoreConnection(String),

    #[error("{0}")]
    Constraint(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("terminal prompt failed: {0}")]
    PromptIo(#[from] std::io::Error),

    #[error("session interrupted")]
    Interrupted,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::StoreConnection(_) => ErrorKind::StoreConnection,
            AppError::Constraint(_) => ErrorKind::Constraint,
            AppError::Query(_) => ErrorKind::Query,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::PromptIo(_) => ErrorKind::PromptIo,
            AppError::Interrupted => ErrorKind::Interrupted,
        }
    }

    /// Prompt failures end the session; everything else is reported and the
    /// menu comes back.
    pub fn is_session_fatal(&self) -> bool {
        matches!(self.kind(), ErrorKind::PromptIo | ErrorKind::Interrupted)
    }
}

impl From<SqlError> for AppError {
    fn from(err: SqlError) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => AppError::Constraint(err.to_string()),
            Some(
                ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::PermissionDenied
                | ErrorCode::ReadOnly
                | ErrorCode::SystemIoFailure
                | ErrorCode::DatabaseCorrupt,
            ) => AppError::StoreConnection(err.to_string()),
            _ => AppError::Query(err.to_string()),
        }
    }
}
