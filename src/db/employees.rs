use rusqlite::params;

use super::connection::Gateway;
use crate::error::{AppError, AppResult};
use crate::models::{Employee, NewEmployee};

/// Every employee, in insertion order.
pub fn fetch_employees(gateway: &Gateway) -> AppResult<Vec<Employee>> {
    gateway.query_map(
        "SELECT id, first_name, last_name, role_id, manager_id FROM employee ORDER BY id",
        params![],
        |row| {
            Ok(Employee {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                role_id: row.get(3)?,
                manager_id: row.get(4)?,
            })
        },
    )
}

/// Insert an employee. `manager_id` of `None` is stored as NULL.
pub fn insert_employee(gateway: &Gateway, employee: &NewEmployee) -> AppResult<Employee> {
    let ack = gateway.execute(
        "INSERT INTO employee (first_name, last_name, role_id, manager_id) VALUES (?1, ?2, ?3, ?4)",
        params![
            employee.first_name,
            employee.last_name,
            employee.role_id,
            employee.manager_id
        ],
    )?;

    Ok(Employee {
        id: ack.last_insert_id,
        first_name: employee.first_name.clone(),
        last_name: employee.last_name.clone(),
        role_id: employee.role_id,
        manager_id: employee.manager_id,
    })
}

/// Point an employee at the role currently titled `role_title`.
///
/// The title is resolved inside the UPDATE, at write time. A title that
/// matches no role, or more than one, resolves to NULL and trips the NOT NULL
/// constraint, leaving the employee's role as it was.
pub fn update_employee_role(gateway: &Gateway, employee_id: i64, role_title: &str) -> AppResult<()> {
    let ack = gateway.execute(
        "UPDATE employee
         SET role_id = (SELECT CASE WHEN COUNT(*) = 1 THEN MIN(id) END FROM role WHERE title = ?1)
         WHERE id = ?2",
        params![role_title, employee_id],
    )?;

    if ack.rows_affected == 0 {
        Err(AppError::NotFound(format!("Employee {employee_id} not found")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ensure_tables, insert_department, insert_role};
    use crate::error::ErrorKind;
    use crate::models::NewRole;

    fn seeded() -> (Gateway, i64, i64) {
        let gateway = Gateway::open_in_memory().unwrap();
        ensure_tables(&gateway);
        let dept = insert_department(&gateway, "Engineering").unwrap();
        let engineer = insert_role(
            &gateway,
            &NewRole {
                title: "Engineer".into(),
                salary: 75000,
                department_id: dept.id,
            },
        )
        .unwrap();
        let lead = insert_role(
            &gateway,
            &NewRole {
                title: "Lead".into(),
                salary: 95000,
                department_id: dept.id,
            },
        )
        .unwrap();
        (gateway, engineer.id, lead.id)
    }

    fn new_employee(first: &str, role_id: i64, manager_id: Option<i64>) -> NewEmployee {
        NewEmployee {
            first_name: first.into(),
            last_name: "Tester".into(),
            role_id,
            manager_id,
        }
    }

    #[test]
    fn manager_is_optional() {
        let (gateway, engineer, _) = seeded();

        let boss = insert_employee(&gateway, &new_employee("Grace", engineer, None)).unwrap();
        let report =
            insert_employee(&gateway, &new_employee("Ada", engineer, Some(boss.id))).unwrap();

        let listed = fetch_employees(&gateway).unwrap();
        assert_eq!(listed, vec![boss.clone(), report]);
        assert_eq!(listed[0].manager_id, None);
        assert_eq!(listed[1].manager_id, Some(boss.id));
    }

    #[test]
    fn unknown_manager_is_a_constraint_error() {
        let (gateway, engineer, _) = seeded();

        let err = insert_employee(&gateway, &new_employee("Ada", engineer, Some(77))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Constraint);
    }

    #[test]
    fn update_role_touches_only_the_selected_employee() {
        let (gateway, engineer, lead) = seeded();
        let ada = insert_employee(&gateway, &new_employee("Ada", engineer, None)).unwrap();
        let grace = insert_employee(&gateway, &new_employee("Grace", engineer, None)).unwrap();

        update_employee_role(&gateway, ada.id, "Lead").unwrap();

        let listed = fetch_employees(&gateway).unwrap();
        let by_id = |id| listed.iter().find(|e| e.id == id).unwrap().role_id;
        assert_eq!(by_id(ada.id), lead);
        assert_eq!(by_id(grace.id), engineer);
    }

    #[test]
    fn update_with_unknown_title_fails_and_keeps_role() {
        let (gateway, engineer, _) = seeded();
        let ada = insert_employee(&gateway, &new_employee("Ada", engineer, None)).unwrap();

        let err = update_employee_role(&gateway, ada.id, "Astronaut").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Constraint);
        assert_eq!(fetch_employees(&gateway).unwrap()[0].role_id, engineer);
    }

    #[test]
    fn update_with_ambiguous_title_fails_and_keeps_role() {
        let (gateway, engineer, lead) = seeded();
        let ada = insert_employee(&gateway, &new_employee("Ada", lead, None)).unwrap();
        let department_id = crate::db::fetch_roles(&gateway).unwrap()[0].department_id;
        let twin = insert_role(
            &gateway,
            &NewRole {
                title: "Engineer".into(),
                salary: 80000,
                department_id,
            },
        )
        .unwrap();
        assert_ne!(twin.id, engineer);

        let err = update_employee_role(&gateway, ada.id, "Engineer").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Constraint);
        assert_eq!(fetch_employees(&gateway).unwrap()[0].role_id, lead);
    }

    #[test]
    fn update_for_missing_employee_is_not_found() {
        let (gateway, _, _) = seeded();

        let err = update_employee_role(&gateway, 404, "Lead").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
