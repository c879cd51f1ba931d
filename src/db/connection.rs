use std::path::Path;

use rusqlite::{Connection, Row, ToSql};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Write acknowledgment returned by [`Gateway::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack {
    pub rows_affected: usize,
    pub last_insert_id: i64,
}

/// Owns the single store connection for the lifetime of a session.
///
/// Every statement goes through [`Gateway::query_map`] or
/// [`Gateway::execute`] with positional parameters bound by SQLite, so user
/// text never becomes part of the SQL itself. The gateway is opened once at
/// startup and must be handed back through [`Gateway::close`] when the session
/// ends.
pub struct Gateway {
    conn: Connection,
}

impl Gateway {
    /// Open (creating if needed) the database file at `path`.
    pub fn open(path: &Path) -> AppResult<Self> {
        let conn = Connection::open(path).map_err(|err| {
            AppError::StoreConnection(format!("failed to open {}: {err}", path.display()))
        })?;
        Self::from_connection(conn)
    }

    /// Fresh private database, used by tests and throwaway sessions.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|err| AppError::StoreConnection(err.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        // SQLite leaves foreign keys unenforced unless asked per connection.
        conn.execute_batch("PRAGMA foreign_keys = ON")
            .map_err(|err| AppError::StoreConnection(format!("failed to enable foreign keys: {err}")))?;
        Ok(Self { conn })
    }

    /// Run a read and map every row through `map_row`.
    pub fn query_map<T, F>(&self, sql: &str, params: &[&dyn ToSql], map_row: F) -> AppResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        debug!(sql, params = params.len(), "query");
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, map_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Run a write and report how many rows it touched.
    pub fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> AppResult<Ack> {
        debug!(sql, params = params.len(), "execute");
        let rows_affected = self.conn.execute(sql, params)?;
        Ok(Ack {
            rows_affected,
            last_insert_id: self.conn.last_insert_rowid(),
        })
    }

    /// Run a parameterless batch, used for DDL.
    pub(crate) fn execute_batch(&self, sql: &str) -> AppResult<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Release the connection. Consuming `self` guarantees nothing can use the
    /// gateway afterwards.
    pub fn close(self) -> AppResult<()> {
        self.conn
            .close()
            .map_err(|(_, err)| AppError::StoreConnection(format!("failed to close database: {err}")))
    }
}
