//! Plain data holders mirroring the three tables. They stay free of
//! persistence and presentation logic; the `db` module fills them and the menu
//! turns them into choices and table rows.

#[derive(Debug, Clone, PartialEq)]
/// A row of the `department` table.
pub struct Department {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
/// A row of the `role` table. `salary` comes back from a `DECIMAL(10, 2)`
/// column, so it is held as a float and rendered with two decimals.
pub struct Role {
    pub id: i64,
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
/// A row of the `employee` table. `manager_id` is `None` for employees
/// without a manager.
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub manager_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
/// Lookup projection used to label employees in selection lists.
pub struct EmployeeName {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl EmployeeName {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Lookup projection of a role: just enough to label and identify it.
pub struct RoleTitle {
    pub id: i64,
    pub title: String,
}

/// Values collected by the "Add Employee" prompts.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub manager_id: Option<i64>,
}

/// Values collected by the "Add Role" prompts.
#[derive(Debug, Clone)]
pub struct NewRole {
    pub title: String,
    pub salary: i64,
    pub department_id: i64,
}
