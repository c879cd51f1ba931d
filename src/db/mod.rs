//! Persistence module split across logical submodules.

mod connection;
mod departments;
mod employees;
pub mod lookups;
mod roles;
mod schema;

pub use connection::{Ack, Gateway};
pub use departments::{fetch_departments, insert_department};
pub use employees::{fetch_employees, insert_employee, update_employee_role};
pub use roles::{fetch_roles, insert_role};
pub use schema::{
    database_path, ensure_database, ensure_tables, initialize, SchemaReport, TableStep,
    DATABASE_NAME,
};
