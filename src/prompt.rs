//! The narrow interface the menu uses to talk to a human. The terminal UI in
//! [`crate::ui`] implements it with ratatui; tests implement it with a script.

use crate::error::AppResult;

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One line of feedback shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Rows and columns ready to render, every cell already formatted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

/// Inline validation hook for free-text prompts. `Err` carries the message
/// shown before asking again.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Validator that accepts anything.
pub fn accept_any(_: &str) -> Result<(), String> {
    Ok(())
}

pub trait Prompter {
    /// Single choice among `labels`. `None` when nothing could be picked, which
    /// happens when the list is empty.
    fn select(&mut self, message: &str, labels: &[String]) -> AppResult<Option<usize>>;

    /// Free text. Implementations keep asking until `validate` accepts.
    fn input(&mut self, message: &str, validate: Validator<'_>) -> AppResult<String>;

    fn show_table(&mut self, table: TableView) -> AppResult<()>;

    fn report(&mut self, status: Status) -> AppResult<()>;
}

/// A labelled option whose value is handed back when chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ask for one of `choices` and return its value.
pub fn select_choice<P, T>(prompter: &mut P, message: &str, choices: &[Choice<T>]) -> AppResult<Option<T>>
where
    P: Prompter + ?Sized,
    T: Clone,
{
    let labels: Vec<String> = choices.iter().map(|choice| choice.label.clone()).collect();
    let picked = prompter.select(message, &labels)?;
    Ok(picked.and_then(|idx| choices.get(idx)).map(|choice| choice.value.clone()))
}

/// Largest magnitude a `DECIMAL(10, 2)` column holds in whole units.
const MAX_SALARY: f64 = 99_999_999.0;

/// Salary must be a whole decimal number. Surrounding whitespace and a zero
/// fraction ("50000.00") are tolerated; blank input and hex literals are not.
pub fn parse_salary(input: &str) -> Result<i64, String> {
    const INVALID: &str = "Please enter a valid number.";

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(INVALID.to_string());
    }
    let value: f64 = trimmed.parse().map_err(|_| INVALID.to_string())?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(INVALID.to_string());
    }
    if value.abs() > MAX_SALARY {
        return Err(format!("Salary cannot exceed {MAX_SALARY:.0}."));
    }
    Ok(value as i64)
}

pub fn validate_salary(input: &str) -> Result<(), String> {
    parse_salary(input).map(|_| ())
}
