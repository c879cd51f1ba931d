#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use employee_manager::prompt::{Prompter, Status, StatusKind, TableView, Validator};
use employee_manager::{initialize, AppError, AppResult, Gateway};
use tempfile::TempDir;

/// One scripted reaction to a prompt.
pub enum Answer {
    /// Choose the option with this label.
    Pick(&'static str),
    /// Choose by position, even one that is out of range.
    PickIndex(usize),
    /// Confirm a list without choosing anything.
    Nothing,
    /// Type this text and press Enter.
    Text(&'static str),
    /// Run a side effect, then handle the prompt with the inner answer.
    After(Box<dyn FnOnce()>, Box<Answer>),
    /// Behave like a user pressing Ctrl-C.
    Interrupt,
}

impl Answer {
    pub fn after(effect: impl FnOnce() + 'static, answer: Answer) -> Self {
        Answer::After(Box::new(effect), Box::new(answer))
    }
}

/// Prompter that replays a fixed script and records everything shown.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
    /// Every select prompt with the labels it offered.
    pub offered: Vec<(String, Vec<String>)>,
    pub tables: Vec<TableView>,
    pub statuses: Vec<Status>,
    pub rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Label lists offered by every select prompt asking `message`.
    pub fn choices_for(&self, message: &str) -> Vec<Vec<String>> {
        self.offered
            .iter()
            .filter(|(asked, _)| asked == message)
            .map(|(_, labels)| labels.clone())
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.statuses
            .iter()
            .filter(|status| status.kind == StatusKind::Error)
            .map(|status| status.text.as_str())
            .collect()
    }

    pub fn infos(&self) -> Vec<&str> {
        self.statuses
            .iter()
            .filter(|status| status.kind == StatusKind::Info)
            .map(|status| status.text.as_str())
            .collect()
    }

    fn next_answer(&mut self) -> AppResult<Answer> {
        let answer = self.answers.pop_front().ok_or_else(|| {
            AppError::PromptIo(io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        })?;
        match answer {
            Answer::After(effect, inner) => {
                effect();
                Ok(*inner)
            }
            Answer::Interrupt => Err(AppError::Interrupted),
            other => Ok(other),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, message: &str, labels: &[String]) -> AppResult<Option<usize>> {
        self.asked.push(message.to_string());
        self.offered.push((message.to_string(), labels.to_vec()));
        match self.next_answer()? {
            Answer::Pick(label) => {
                let idx = labels
                    .iter()
                    .position(|candidate| candidate == label)
                    .unwrap_or_else(|| panic!("`{label}` not offered for `{message}`: {labels:?}"));
                Ok(Some(idx))
            }
            Answer::PickIndex(idx) => Ok(Some(idx)),
            Answer::Nothing => Ok(None),
            _ => panic!("unexpected answer for select `{message}`"),
        }
    }

    fn input(&mut self, message: &str, validate: Validator<'_>) -> AppResult<String> {
        self.asked.push(message.to_string());
        loop {
            match self.next_answer()? {
                Answer::Text(text) => match validate(text) {
                    Ok(()) => return Ok(text.to_string()),
                    Err(rejection) => self.rejections.push(rejection),
                },
                _ => panic!("unexpected answer for input `{message}`"),
            }
        }
    }

    fn show_table(&mut self, table: TableView) -> AppResult<()> {
        self.tables.push(table);
        Ok(())
    }

    fn report(&mut self, status: Status) -> AppResult<()> {
        self.statuses.push(status);
        Ok(())
    }
}

/// A fresh on-disk store with all three tables.
pub fn store() -> (TempDir, Gateway) {
    let dir = tempfile::tempdir().expect("tempdir");
    let (gateway, report) = initialize(dir.path()).expect("initialize store");
    assert!(report.all_ok());
    (dir, gateway)
}

/// Reopen the store in `dir`, e.g. after a session has closed its gateway.
pub fn reopen(dir: &TempDir) -> Gateway {
    initialize(dir.path()).expect("reopen store").0
}
