use rusqlite::params;

use super::connection::Gateway;
use crate::error::AppResult;
use crate::models::{NewRole, Role};

/// Every role with its salary and owning department.
pub fn fetch_roles(gateway: &Gateway) -> AppResult<Vec<Role>> {
    gateway.query_map(
        "SELECT id, title, salary, department_id FROM role ORDER BY id",
        params![],
        |row| {
            Ok(Role {
                id: row.get(0)?,
                title: row.get(1)?,
                salary: row.get(2)?,
                department_id: row.get(3)?,
            })
        },
    )
}

/// Insert a role. A `department_id` with no matching department is rejected by
/// the foreign key.
pub fn insert_role(gateway: &Gateway, role: &NewRole) -> AppResult<Role> {
    let ack = gateway.execute(
        "INSERT INTO role (title, department_id, salary) VALUES (?1, ?2, ?3)",
        params![role.title, role.department_id, role.salary],
    )?;

    Ok(Role {
        id: ack.last_insert_id,
        title: role.title.clone(),
        salary: role.salary as f64,
        department_id: role.department_id,
    })
}
