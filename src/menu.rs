//! The main menu loop. Each pass shows the eight actions, runs the chosen one
//! to completion and comes back, until the user picks "Quit".
//!
//! Store failures stay inside the action that hit them: they are logged,
//! reported as a status line, and the menu is shown again. Only prompt
//! failures end the session early.

use tracing::{error, info, warn};

use crate::db::{self, lookups, Gateway};
use crate::error::{AppError, AppResult, ErrorKind};
use crate::models::{NewEmployee, NewRole};
use crate::prompt::{
    accept_any, parse_salary, select_choice, validate_salary, Choice, Prompter, Status,
    TableView,
};

pub const MAIN_MENU_MESSAGE: &str = "What would you like to do?";

/// The main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewEmployees,
    AddEmployee,
    UpdateEmployeeRole,
    ViewRoles,
    AddRole,
    ViewDepartments,
    AddDepartment,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 8] = [
        MenuAction::ViewEmployees,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::ViewRoles,
        MenuAction::AddRole,
        MenuAction::ViewDepartments,
        MenuAction::AddDepartment,
        MenuAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ViewEmployees => "View All Employees",
            MenuAction::AddEmployee => "Add Employee",
            MenuAction::UpdateEmployeeRole => "Update Employee Role",
            MenuAction::ViewRoles => "View All Roles",
            MenuAction::AddRole => "Add Role",
            MenuAction::ViewDepartments => "View All Departments",
            MenuAction::AddDepartment => "Add Department",
            MenuAction::Quit => "Quit",
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|action| action.label().to_string()).collect()
    }
}

/// What happened during one pass of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    /// `None` when the selection did not match any action.
    pub action: Option<MenuAction>,
    pub error: Option<ErrorKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Back to the main menu.
    Continue(ActionReport),
    Quit,
}

pub struct MenuController<'a, P: Prompter + ?Sized> {
    gateway: &'a Gateway,
    prompter: &'a mut P,
}

impl<'a, P: Prompter + ?Sized> MenuController<'a, P> {
    pub fn new(gateway: &'a Gateway, prompter: &'a mut P) -> Self {
        Self { gateway, prompter }
    }

    /// Show the main menu once and run whatever was picked.
    pub fn step(&mut self) -> AppResult<Transition> {
        let picked = self.prompter.select(MAIN_MENU_MESSAGE, &MenuAction::labels())?;
        let Some(action) = picked.and_then(|idx| MenuAction::ALL.get(idx).copied()) else {
            warn!(?picked, "unrecognized menu selection");
            self.prompter.report(Status::error("Invalid option selected."))?;
            return Ok(Transition::Continue(ActionReport {
                action: None,
                error: None,
            }));
        };

        // Each action carries the prefix used when it fails.
        let (context, outcome) = match action {
            MenuAction::Quit => {
                self.prompter.report(Status::info("Goodbye!"))?;
                return Ok(Transition::Quit);
            }
            MenuAction::ViewEmployees => ("Error retrieving employees", self.view_employees()),
            MenuAction::AddEmployee => ("Error adding employee", self.add_employee()),
            MenuAction::UpdateEmployeeRole => {
                ("Error updating employee role", self.update_employee_role())
            }
            MenuAction::ViewRoles => ("Error retrieving roles", self.view_roles()),
            MenuAction::AddRole => ("Error adding role", self.add_role()),
            MenuAction::ViewDepartments => {
                ("Error retrieving departments", self.view_departments())
            }
            MenuAction::AddDepartment => ("Error adding department", self.add_department()),
        };

        match outcome {
            Ok(()) => Ok(Transition::Continue(ActionReport {
                action: Some(action),
                error: None,
            })),
            Err(err) if err.is_session_fatal() => Err(err),
            Err(err) => {
                error!(action = action.label(), error = %err, "action failed");
                self.prompter
                    .report(Status::error(format!("{context}: {err}")))?;
                Ok(Transition::Continue(ActionReport {
                    action: Some(action),
                    error: Some(err.kind()),
                }))
            }
        }
    }

    fn view_employees(&mut self) -> AppResult<()> {
        let employees = db::fetch_employees(self.gateway)?;
        let mut table = TableView::new(
            "Employees",
            &["id", "first_name", "last_name", "role_id", "manager_id"],
        );
        for employee in employees {
            table.push_row(vec![
                employee.id.to_string(),
                employee.first_name,
                employee.last_name,
                employee.role_id.to_string(),
                employee
                    .manager_id
                    .map_or_else(|| "null".to_string(), |id| id.to_string()),
            ]);
        }
        self.prompter.show_table(table)
    }

    fn view_roles(&mut self) -> AppResult<()> {
        let roles = db::fetch_roles(self.gateway)?;
        let mut table = TableView::new("Roles", &["id", "title", "salary", "department_id"]);
        for role in roles {
            table.push_row(vec![
                role.id.to_string(),
                role.title,
                format!("{:.2}", role.salary),
                role.department_id.to_string(),
            ]);
        }
        self.prompter.show_table(table)
    }

    fn view_departments(&mut self) -> AppResult<()> {
        let departments = db::fetch_departments(self.gateway)?;
        let mut table = TableView::new("Departments", &["id", "name"]);
        for department in departments {
            table.push_row(vec![department.id.to_string(), department.name]);
        }
        self.prompter.show_table(table)
    }

    fn add_employee(&mut self) -> AppResult<()> {
        let first_name = self
            .prompter
            .input("What is the employee's first name?", &accept_any)?;
        let last_name = self
            .prompter
            .input("What is the employee's last name?", &accept_any)?;

        let roles = lookups::role_titles(self.gateway);
        let role_choices: Vec<Choice<i64>> = self
            .or_empty("employee roles", roles)?
            .into_iter()
            .map(|role| Choice::new(role.title, role.id))
            .collect();

        let names = lookups::employee_names(self.gateway);
        let mut manager_choices: Vec<Choice<Option<i64>>> = self
            .or_empty("employee names", names)?
            .into_iter()
            .map(|name| Choice::new(name.full_name(), Some(name.id)))
            .collect();
        manager_choices.push(Choice::new("None", None));

        let role_id = select_choice(
            &mut *self.prompter,
            "What is the employee's role?",
            &role_choices,
        )?;
        let manager_id = select_choice(
            &mut *self.prompter,
            "Who is the employee's manager?",
            &manager_choices,
        )?
        .flatten();
        let role_id = role_id.ok_or_else(|| AppError::Validation("No role selected.".into()))?;

        let employee = db::insert_employee(
            self.gateway,
            &NewEmployee {
                first_name,
                last_name,
                role_id,
                manager_id,
            },
        )?;
        info!(id = employee.id, "employee added");
        self.prompter.report(Status::info("Employee added successfully."))
    }

    fn update_employee_role(&mut self) -> AppResult<()> {
        let names = lookups::employee_names(self.gateway);
        let employee_choices: Vec<Choice<i64>> = self
            .or_empty("employee names", names)?
            .into_iter()
            .map(|name| Choice::new(name.full_name(), name.id))
            .collect();

        let roles = lookups::role_titles(self.gateway);
        let title_choices: Vec<Choice<String>> = self
            .or_empty("employee roles", roles)?
            .into_iter()
            .map(|role| Choice::new(role.title.clone(), role.title))
            .collect();

        let employee_id =
            select_choice(&mut *self.prompter, "Select an employee:", &employee_choices)?
                .ok_or_else(|| AppError::Validation("No employee selected.".into()))?;
        let title = select_choice(&mut *self.prompter, "Select the new role:", &title_choices)?
            .ok_or_else(|| AppError::Validation("No role selected.".into()))?;

        db::update_employee_role(self.gateway, employee_id, &title)?;
        info!(employee_id, title = %title, "employee role updated");
        self.prompter
            .report(Status::info("Employee role updated successfully."))
    }

    fn add_role(&mut self) -> AppResult<()> {
        let title = self
            .prompter
            .input("What is the name of the role?", &accept_any)?;
        let salary_text = self
            .prompter
            .input("What is the salary of the role?", &validate_salary)?;
        let salary = parse_salary(&salary_text).map_err(AppError::Validation)?;

        let departments = lookups::department_names(self.gateway);
        let department_choices: Vec<Choice<i64>> = self
            .or_empty("department list", departments)?
            .into_iter()
            .map(|dept| Choice::new(dept.name, dept.id))
            .collect();
        let department_id = select_choice(
            &mut *self.prompter,
            "Which department does this role belong to?",
            &department_choices,
        )?
        .ok_or_else(|| AppError::Validation("No department selected.".into()))?;

        let role = db::insert_role(
            self.gateway,
            &NewRole {
                title,
                salary,
                department_id,
            },
        )?;
        info!(id = role.id, "role added");
        self.prompter.report(Status::info("Role added successfully."))
    }

    fn add_department(&mut self) -> AppResult<()> {
        let name = self
            .prompter
            .input("What is the name of the department?", &accept_any)?;
        let department = db::insert_department(self.gateway, &name)?;
        info!(id = department.id, "department added");
        self.prompter
            .report(Status::info("Department added successfully."))
    }

    /// A failed lookup degrades to an empty choice list.
    fn or_empty<T>(&mut self, what: &str, fetched: AppResult<Vec<T>>) -> AppResult<Vec<T>> {
        match fetched {
            Ok(items) => Ok(items),
            Err(err) => {
                error!(lookup = what, error = %err, "lookup failed");
                self.prompter
                    .report(Status::error(format!("Error retrieving {what}: {err}")))?;
                Ok(Vec::new())
            }
        }
    }
}

/// Drive the menu until "Quit" or a session-fatal error, then close the
/// store. The gateway is consumed so it cannot outlive the session.
pub fn run_session<P: Prompter + ?Sized>(gateway: Gateway, prompter: &mut P) -> AppResult<()> {
    let outcome = {
        let mut controller = MenuController::new(&gateway, prompter);
        loop {
            match controller.step() {
                Ok(Transition::Continue(_)) => continue,
                Ok(Transition::Quit) => break Ok(()),
                Err(err) => break Err(err),
            }
        }
    };

    if let Err(err) = &outcome {
        error!(error = %err, "session aborted");
    }
    let closed = gateway.close();
    if let Err(err) = &closed {
        error!(error = %err, "failed to close database");
    }
    info!("session ended");

    outcome.and(closed)
}
