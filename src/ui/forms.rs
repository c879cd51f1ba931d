use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Prefix drawn before the text being typed.
pub(crate) const INPUT_PREFIX: &str = "> ";

/// State of a single free-text prompt.
#[derive(Default, Clone)]
pub(crate) struct InputForm {
    pub(crate) value: String,
    pub(crate) error: Option<String>,
}

impl InputForm {
    /// Append a character, ignoring control characters.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.value.push(ch);
        self.error = None;
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.value.pop();
        self.error = None;
    }

    /// Run the validator; on rejection keep the text and remember the message.
    pub(crate) fn submit(&mut self, validate: &dyn Fn(&str) -> Result<(), String>) -> bool {
        match validate(&self.value) {
            Ok(()) => true,
            Err(message) => {
                self.error = Some(message);
                false
            }
        }
    }

    pub(crate) fn value_len(&self) -> usize {
        self.value.chars().count()
    }

    pub(crate) fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(INPUT_PREFIX, Style::default().fg(Color::Cyan)),
            Span::styled(self.value.clone(), Style::default().fg(Color::Yellow)),
        ])];
        if let Some(error) = &self.error {
            lines.push(Line::from(Span::styled(
                format!(">> {error}"),
                Style::default().fg(Color::Red),
            )));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_submit_keeps_text_and_error_until_edit() {
        let mut form = InputForm::default();
        for ch in "abc".chars() {
            form.push_char(ch);
        }

        let digits_only = |input: &str| {
            if input.chars().all(|c| c.is_ascii_digit()) {
                Ok(())
            } else {
                Err("digits only".to_string())
            }
        };

        assert!(!form.submit(&digits_only));
        assert_eq!(form.value, "abc");
        assert_eq!(form.error.as_deref(), Some("digits only"));
        assert_eq!(form.build_lines().len(), 2);

        form.backspace();
        assert!(form.error.is_none());
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut form = InputForm::default();
        assert!(!form.push_char('\u{7}'));
        assert!(form.push_char('é'));
        assert_eq!(form.value_len(), 1);
    }
}
