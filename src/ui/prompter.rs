use std::io;

use crossterm::event::KeyCode;
use ratatui::backend::Backend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table, Wrap};
use ratatui::{Frame, Terminal};

use super::forms::{InputForm, INPUT_PREFIX};
use super::helpers::{column_widths, key_hints, status_style, LOGO};
use super::screens::{SelectState, Transcript};
use super::terminal::{is_interrupt, KeySource};
use crate::error::{AppError, AppResult};
use crate::prompt::{Prompter, Status, TableView, Validator};

/// Footer space reserved for key hints.
const FOOTER_HEIGHT: u16 = 2;
/// Rows a choice list may take before it scrolls.
const MAX_LIST_ROWS: usize = 10;

/// The prompt currently waiting for an answer.
enum PromptView<'a> {
    Select {
        message: &'a str,
        labels: &'a [String],
        selected: usize,
    },
    Input {
        message: &'a str,
        form: &'a InputForm,
    },
}

/// Full-screen prompts drawn with ratatui.
///
/// Each prompt owns the screen until it is answered: the upper pane keeps the
/// last table and recent status lines, the lower pane shows the question.
pub struct TerminalPrompter<B: Backend, K: KeySource> {
    terminal: Terminal<B>,
    keys: K,
    transcript: Transcript,
}

impl<B: Backend, K: KeySource> TerminalPrompter<B, K> {
    pub fn new(terminal: Terminal<B>, keys: K) -> Self {
        Self {
            terminal,
            keys,
            transcript: Transcript::default(),
        }
    }

    /// Queue a line for the output pane without going through a prompt.
    pub fn push_status(&mut self, status: Status) {
        self.transcript.push_status(status);
    }

    /// Hand back the terminal so the caller can restore it, along with what
    /// was last on screen.
    pub fn into_parts(self) -> (Terminal<B>, Transcript) {
        (self.terminal, self.transcript)
    }

    fn draw(&mut self, prompt: PromptView<'_>) -> io::Result<()> {
        let transcript = &self.transcript;
        self.terminal
            .draw(|frame| draw_screen(frame, transcript, &prompt))?;
        Ok(())
    }
}

impl<B: Backend, K: KeySource> Prompter for TerminalPrompter<B, K> {
    fn select(&mut self, message: &str, labels: &[String]) -> AppResult<Option<usize>> {
        let mut state = SelectState::new(labels.len());
        loop {
            self.draw(PromptView::Select {
                message,
                labels,
                selected: state.selected,
            })?;

            let key = self.keys.next_key()?;
            if is_interrupt(&key) {
                return Err(AppError::Interrupted);
            }
            match key.code {
                KeyCode::Up => state.move_selection(-1),
                KeyCode::Down => state.move_selection(1),
                KeyCode::PageUp => state.move_selection(-5),
                KeyCode::PageDown => state.move_selection(5),
                KeyCode::Home => state.select_first(),
                KeyCode::End => state.select_last(),
                KeyCode::Enter => return Ok(state.current()),
                _ => {}
            }
        }
    }

    fn input(&mut self, message: &str, validate: Validator<'_>) -> AppResult<String> {
        let mut form = InputForm::default();
        loop {
            self.draw(PromptView::Input {
                message,
                form: &form,
            })?;

            let key = self.keys.next_key()?;
            if is_interrupt(&key) {
                return Err(AppError::Interrupted);
            }
            match key.code {
                KeyCode::Char(ch) => {
                    form.push_char(ch);
                }
                KeyCode::Backspace => form.backspace(),
                KeyCode::Enter => {
                    if form.submit(validate) {
                        return Ok(form.value);
                    }
                }
                _ => {}
            }
        }
    }

    fn show_table(&mut self, table: TableView) -> AppResult<()> {
        self.transcript.show_table(table);
        Ok(())
    }

    fn report(&mut self, status: Status) -> AppResult<()> {
        self.transcript.push_status(status);
        Ok(())
    }
}

fn draw_screen(frame: &mut Frame, transcript: &Transcript, prompt: &PromptView<'_>) {
    let area = frame.area();
    let prompt_height = match prompt {
        PromptView::Select { labels, .. } => labels.len().clamp(1, MAX_LIST_ROWS) as u16 + 2,
        PromptView::Input { form, .. } => form.build_lines().len() as u16 + 2,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(prompt_height),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    draw_output(frame, chunks[0], transcript);
    match prompt {
        PromptView::Select {
            message,
            labels,
            selected,
        } => draw_select(frame, chunks[1], message, labels, *selected),
        PromptView::Input { message, form } => draw_input(frame, chunks[1], message, form),
    }
    draw_footer(frame, chunks[2], prompt);
}

fn draw_output(frame: &mut Frame, area: Rect, transcript: &Transcript) {
    let status_lines: Vec<Line> = transcript
        .statuses()
        .map(|status| Line::from(Span::styled(status.text.clone(), status_style(status.kind))))
        .collect();
    let status_height = (status_lines.len() as u16).min(area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(status_height)])
        .split(area);

    if transcript.show_logo {
        let logo: Vec<Line> = LOGO.iter().map(|row| Line::from(*row)).collect();
        frame.render_widget(Paragraph::new(logo).alignment(Alignment::Center), chunks[0]);
    } else if let Some(table) = &transcript.table {
        draw_table(frame, chunks[0], table);
    }

    frame.render_widget(
        Paragraph::new(status_lines).wrap(Wrap { trim: true }),
        chunks[1],
    );
}

fn draw_table(frame: &mut Frame, area: Rect, table: &TableView) {
    let widths: Vec<Constraint> = column_widths(table)
        .into_iter()
        .map(Constraint::Length)
        .collect();
    let header = Row::new(table.headers.iter().cloned())
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = table.rows.iter().map(|row| Row::new(row.iter().cloned()));

    let title = format!("{} ({} rows)", table.title, table.rows.len());
    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(widget, area);
}

fn draw_select(frame: &mut Frame, area: Rect, message: &str, labels: &[String], selected: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("? {message}"));

    if labels.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "(no choices available)",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = labels
        .iter()
        .map(|label| ListItem::new(label.as_str()))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_input(frame: &mut Frame, area: Rect, message: &str, form: &InputForm) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("? {message}"));
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(form.build_lines()).block(block), area);

    frame.set_cursor_position(input_cursor(inner, form.value_len()));
}

/// Cursor just past the typed text, pinned to the last column of `inner` once
/// the text is wider than the box.
fn input_cursor(inner: Rect, value_len: usize) -> (u16, u16) {
    let typed = u16::try_from(INPUT_PREFIX.len() + value_len).unwrap_or(u16::MAX);
    let last_column = inner.right().saturating_sub(1).max(inner.x);
    (inner.x.saturating_add(typed).min(last_column), inner.y)
}

fn draw_footer(frame: &mut Frame, area: Rect, prompt: &PromptView<'_>) {
    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hints = match prompt {
        PromptView::Select { .. } => key_hints(&[
            ("[↑↓]", "Move"),
            ("[Enter]", "Choose"),
            ("[Ctrl-C]", "Abort"),
        ]),
        PromptView::Input { .. } => key_hints(&[
            ("[Enter]", "Submit"),
            ("[Backspace]", "Delete"),
            ("[Ctrl-C]", "Abort"),
        ]),
    };
    frame.render_widget(Paragraph::new(hints), inner);
}
