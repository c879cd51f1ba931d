use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::prompt::{StatusKind, TableView};

/// Banner shown above the first menu of a session.
pub(crate) const LOGO: &[&str] = &[
    " _______________________________________________________ ",
    "|       ______                __                        |",
    "|      / ____/___ ___  ____  / /___  __  _____  ___     |",
    "|     / __/ / __ `__ \\/ __ \\/ / __ \\/ / / / _ \\/ _ \\    |",
    "|    / /___/ / / / / / /_/ / / /_/ / /_/ /  __/  __/    |",
    "|   /_____/_/_/_/ /_/ .___/_/\\____/\\__, /\\___/\\___/     |",
    "|      /  |/  /___ /_/__  ____ ___/____/_  _____        |",
    "|     / /|_/ / __ `/ __ \\/ __ `/ __ `/ _ \\/ ___/        |",
    "|    / /  / / /_/ / / / / /_/ / /_/ /  __/ /            |",
    "|   /_/  /_/\\__,_/_/ /_/\\__,_/\\__, /\\___/_/             |",
    "|                            /____/                     |",
    "|_______________________________________________________|",
];

/// Colour for a status line.
pub(crate) fn status_style(kind: StatusKind) -> Style {
    match kind {
        StatusKind::Info => Style::default().fg(Color::Green),
        StatusKind::Error => Style::default().fg(Color::Red),
    }
}

/// Width of each column: the widest of the header and every cell.
pub(crate) fn column_widths(table: &TableView) -> Vec<u16> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (idx, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(idx) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }
    widths
        .into_iter()
        .map(|width| u16::try_from(width).unwrap_or(u16::MAX))
        .collect()
}

/// Footer hint line, rendered the same way for every prompt type.
pub(crate) fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(format!(" {action}   ")));
    }
    Line::from(spans)
}
