//! Read-only projections that feed selection lists. They propagate store
//! errors untouched; the menu decides how to degrade.

use rusqlite::params;

use super::connection::Gateway;
use crate::error::AppResult;
use crate::models::{Department, EmployeeName, RoleTitle};

/// First and last name of every employee with its id, oldest first. Feeds the
/// employee picker in "Update Employee Role" and the manager picker in
/// "Add Employee".
pub fn employee_names(gateway: &Gateway) -> AppResult<Vec<EmployeeName>> {
    gateway.query_map(
        "SELECT first_name, last_name, id FROM employee ORDER BY id",
        params![],
        |row| {
            Ok(EmployeeName {
                first_name: row.get(0)?,
                last_name: row.get(1)?,
                id: row.get(2)?,
            })
        },
    )
}

/// Id and title of every role, oldest first. Duplicate titles are kept as
/// separate entries.
pub fn role_titles(gateway: &Gateway) -> AppResult<Vec<RoleTitle>> {
    gateway.query_map("SELECT id, title FROM role ORDER BY id", params![], |row| {
        Ok(RoleTitle {
            id: row.get(0)?,
            title: row.get(1)?,
        })
    })
}

/// Every department as `(id, name)`, oldest first, for the department picker
/// in "Add Role".
pub fn department_names(gateway: &Gateway) -> AppResult<Vec<Department>> {
    gateway.query_map("SELECT name, id FROM department ORDER BY id", params![], |row| {
        Ok(Department {
            name: row.get(0)?,
            id: row.get(1)?,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ensure_tables, insert_department, insert_employee, insert_role};
    use crate::error::ErrorKind;
    use crate::models::{NewEmployee, NewRole};

    #[test]
    fn lookups_project_ids_and_labels() {
        let gateway = Gateway::open_in_memory().unwrap();
        ensure_tables(&gateway);
        let dept = insert_department(&gateway, "Sales").unwrap();
        let role = insert_role(
            &gateway,
            &NewRole {
                title: "Rep".into(),
                salary: 40000,
                department_id: dept.id,
            },
        )
        .unwrap();
        let emp = insert_employee(
            &gateway,
            &NewEmployee {
                first_name: "Alan".into(),
                last_name: "Turing".into(),
                role_id: role.id,
                manager_id: None,
            },
        )
        .unwrap();

        assert_eq!(department_names(&gateway).unwrap(), vec![dept]);
        assert_eq!(
            role_titles(&gateway).unwrap(),
            vec![RoleTitle { id: role.id, title: "Rep".into() }]
        );
        let names = employee_names(&gateway).unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].id, emp.id);
        assert_eq!(names[0].full_name(), "Alan Turing");
    }

    #[test]
    fn lookups_propagate_store_errors() {
        let gateway = Gateway::open_in_memory().unwrap();

        let err = role_titles(&gateway).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Query);
    }
}
