use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::connection::Gateway;
use crate::error::{AppError, AppResult};

/// Logical database name. The embedded store keeps it as a file name.
pub const DATABASE_NAME: &str = "companydb";

/// Tables in foreign-key dependency order: `role` needs `department`, and
/// `employee` needs `role` as well as itself.
const TABLES: &[(&str, &str)] = &[
    (
        "department",
        "CREATE TABLE IF NOT EXISTS department (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(30) NOT NULL CHECK (length(name) <= 30)
        )",
    ),
    (
        "role",
        "CREATE TABLE IF NOT EXISTS role (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title VARCHAR(30) NOT NULL CHECK (length(title) <= 30),
            salary DECIMAL(10, 2) NOT NULL,
            department_id INTEGER NOT NULL,
            FOREIGN KEY (department_id) REFERENCES department (id)
        )",
    ),
    (
        "employee",
        "CREATE TABLE IF NOT EXISTS employee (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name VARCHAR(30) NOT NULL CHECK (length(first_name) <= 30),
            last_name VARCHAR(30) NOT NULL CHECK (length(last_name) <= 30),
            role_id INTEGER NOT NULL,
            manager_id INTEGER NULL,
            FOREIGN KEY (role_id) REFERENCES role (id),
            FOREIGN KEY (manager_id) REFERENCES employee (id)
        )",
    ),
];

/// Outcome of one table-creation step.
#[derive(Debug)]
pub struct TableStep {
    pub table: &'static str,
    pub outcome: AppResult<()>,
}

/// Everything the initializer did, in the order it did it.
#[derive(Debug, Default)]
pub struct SchemaReport {
    pub steps: Vec<TableStep>,
}

impl SchemaReport {
    pub fn all_ok(&self) -> bool {
        self.steps.iter().all(|step| step.outcome.is_ok())
    }

    /// Human-readable line per step, shown before the first menu.
    pub fn lines(&self) -> Vec<(bool, String)> {
        self.steps
            .iter()
            .map(|step| match &step.outcome {
                Ok(()) => (true, format!("{} table ready.", capitalize(step.table))),
                Err(err) => (false, format!("Error creating {} table: {err}", step.table)),
            })
            .collect()
    }
}

/// Path of the database file inside `data_dir`.
pub fn database_path(data_dir: &Path) -> PathBuf {
    data_dir.join(format!("{DATABASE_NAME}.sqlite"))
}

/// Make sure the database exists and open it. Failure here means there is no
/// store to talk to, so callers treat it as fatal.
pub fn ensure_database(data_dir: &Path) -> AppResult<Gateway> {
    fs::create_dir_all(data_dir).map_err(|err| {
        AppError::StoreConnection(format!(
            "failed to create data directory {}: {err}",
            data_dir.display()
        ))
    })?;

    let gateway = Gateway::open(&database_path(data_dir))?;
    info!(database = DATABASE_NAME, "database ready");
    Ok(gateway)
}

/// Attempt every table creation. A failed step is logged and recorded but does
/// not stop the ones after it.
pub fn ensure_tables(gateway: &Gateway) -> SchemaReport {
    let mut report = SchemaReport::default();

    for &(table, ddl) in TABLES {
        info!(table, "creating table");
        let outcome = gateway.execute_batch(ddl);
        match &outcome {
            Ok(()) => info!(table, "table ready"),
            Err(err) => error!(table, error = %err, "failed to create table"),
        }
        report.steps.push(TableStep { table, outcome });
    }

    report
}

/// Startup sequence: database first, then the three tables.
pub fn initialize(data_dir: &Path) -> AppResult<(Gateway, SchemaReport)> {
    let gateway = ensure_database(data_dir)?;
    let report = ensure_tables(&gateway);
    Ok((gateway, report))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn initialize_creates_database_file_and_tables() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("nested");

        let (gateway, report) = initialize(&data_dir).unwrap();

        assert!(database_path(&data_dir).exists());
        assert!(report.all_ok());
        let tables: Vec<_> = report.steps.iter().map(|step| step.table).collect();
        assert_eq!(tables, vec!["department", "role", "employee"]);
        gateway.close().unwrap();
    }

    #[test]
    fn initialize_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();

        let (first, _) = initialize(dir.path()).unwrap();
        first
            .execute("INSERT INTO department (name) VALUES (?1)", rusqlite::params!["Ops"])
            .unwrap();
        first.close().unwrap();

        let (second, report) = initialize(dir.path()).unwrap();
        assert!(report.all_ok());
        let names = second
            .query_map("SELECT name FROM department", &[], |row| row.get::<_, String>(0))
            .unwrap();
        assert_eq!(names, vec!["Ops".to_string()]);
    }

    #[test]
    fn unusable_data_dir_is_fatal() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let err = initialize(file.path()).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::StoreConnection);
    }

    #[test]
    fn failed_table_step_does_not_stop_later_steps() {
        let gateway = Gateway::open_in_memory().unwrap();
        gateway
            .execute_batch(
                "CREATE TABLE department (id INTEGER PRIMARY KEY, name TEXT);
                 CREATE INDEX role ON department (name);",
            )
            .unwrap();

        let report = ensure_tables(&gateway);

        assert!(report.steps[0].outcome.is_ok());
        assert!(report.steps[1].outcome.is_err());
        assert!(report.steps[2].outcome.is_ok());
        assert!(!report.all_ok());
        assert!(!report.lines()[1].0);
        assert!(report.lines()[1].1.starts_with("Error creating role table"));
    }

    #[test]
    fn names_longer_than_thirty_characters_are_rejected() {
        let gateway = Gateway::open_in_memory().unwrap();
        ensure_tables(&gateway);

        let err = gateway
            .execute(
                "INSERT INTO department (name) VALUES (?1)",
                rusqlite::params!["x".repeat(31)],
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Constraint);
    }
}
