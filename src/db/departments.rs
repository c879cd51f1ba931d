use rusqlite::params;

use super::connection::Gateway;
use crate::error::AppResult;
use crate::models::Department;

/// Every department, in insertion order.
pub fn fetch_departments(gateway: &Gateway) -> AppResult<Vec<Department>> {
    gateway.query_map("SELECT id, name FROM department ORDER BY id", params![], |row| {
        Ok(Department {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })
}

/// Insert a department and echo the stored row.
pub fn insert_department(gateway: &Gateway, name: &str) -> AppResult<Department> {
    let ack = gateway.execute("INSERT INTO department (name) VALUES (?1)", params![name])?;
    Ok(Department {
        id: ack.last_insert_id,
        name: name.to_string(),
    })
}
