use std::collections::VecDeque;

use crate::prompt::{Status, TableView};

/// Status lines kept on screen at once.
const STATUS_HISTORY: usize = 6;

/// Cursor over a fixed list of choices.
pub(crate) struct SelectState {
    len: usize,
    pub(crate) selected: usize,
}

impl SelectState {
    pub(crate) fn new(len: usize) -> Self {
        Self { len, selected: 0 }
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.len == 0 {
            return;
        }
        let len = self.len as isize;
        let mut new = self.selected as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// The highlighted index, or `None` when there is nothing to pick.
    pub(crate) fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.selected)
    }
}

/// What the output pane shows: the banner until the first table, then the
/// latest table, plus recent status lines.
pub struct Transcript {
    pub(crate) show_logo: bool,
    pub(crate) table: Option<TableView>,
    pub(crate) statuses: VecDeque<Status>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            show_logo: true,
            table: None,
            statuses: VecDeque::with_capacity(STATUS_HISTORY),
        }
    }
}

impl Transcript {
    pub(crate) fn show_table(&mut self, table: TableView) {
        self.show_logo = false;
        self.table = Some(table);
    }

    pub(crate) fn push_status(&mut self, status: Status) {
        if self.statuses.len() == STATUS_HISTORY {
            self.statuses.pop_front();
        }
        self.statuses.push_back(status);
    }

    pub fn statuses(&self) -> impl Iterator<Item = &Status> {
        self.statuses.iter()
    }

    /// The line to echo once the terminal is restored. A session that ended in
    /// error has nothing to echo; the error itself is reported instead.
    pub fn closing_status<T, E>(&self, outcome: &Result<T, E>) -> Option<&Status> {
        outcome.as_ref().ok().and(self.statuses.back())
    }
}
