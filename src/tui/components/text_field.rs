//! # TextField Component
//!
//! Single-line input used for the subject count, the quick credit entry
//! and the student name prompt.
//!
//! The buffer is internal state; `title` and `focused` are props. The cursor
//! always sits at the end of the buffer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by a TextField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Enter pressed with the current buffer contents
    Submit(String),
    ContentChanged,
}

/// Which characters a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Digits only (counts)
    Integer,
    /// Digits and a decimal point (credits)
    Decimal,
    /// Anything printable (names)
    Text,
}

impl FieldKind {
    fn accepts(self, c: char) -> bool {
        match self {
            FieldKind::Integer => c.is_ascii_digit(),
            FieldKind::Decimal => c.is_ascii_digit() || c == '.',
            FieldKind::Text => !c.is_control(),
        }
    }
}

pub struct TextField {
    pub buffer: String,
    pub title: String,
    pub focused: bool,
    kind: FieldKind,
}

impl TextField {
    pub fn new(title: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            buffer: String::new(),
            title: title.into(),
            focused: false,
            kind,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title.as_str());

        frame.render_widget(Paragraph::new(self.buffer.as_str()).block(block), area);

        if self.focused && area.width > 2 && area.height > 2 {
            let max_x = area.x + area.width - 2;
            let x = (area.x + 1).saturating_add(self.buffer.width() as u16).min(max_x);
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if self.kind.accepts(*c) => {
                self.buffer.push(*c);
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Backspace => self.buffer.pop().map(|_| FieldEvent::ContentChanged),
            TuiEvent::Submit => Some(FieldEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_integer_field_filters_input() {
        let mut field = TextField::new("Subjects", FieldKind::Integer);
        assert_eq!(field.handle_event(&TuiEvent::InputChar('1')), Some(FieldEvent::ContentChanged));
        assert_eq!(field.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(field.handle_event(&TuiEvent::InputChar('.')), None);
        assert_eq!(field.buffer, "1");
    }

    #[test]
    fn test_decimal_field_accepts_point() {
        let mut field = TextField::new("Credits", FieldKind::Decimal);
        for c in "3.5".chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
        assert_eq!(field.buffer, "3.5");
    }

    #[test]
    fn test_backspace_and_submit() {
        let mut field = TextField::new("Name", FieldKind::Text);
        field.set_text("Asha");
        assert_eq!(field.handle_event(&TuiEvent::Backspace), Some(FieldEvent::ContentChanged));
        assert_eq!(
            field.handle_event(&TuiEvent::Submit),
            Some(FieldEvent::Submit("Ash".to_string()))
        );
        // Submit leaves clearing to the parent
        assert_eq!(field.buffer, "Ash");

        field.clear();
        assert_eq!(field.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_render_shows_title_and_text() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = TextField::new("Subjects", FieldKind::Integer);
        field.set_text("6");
        field.focused = true;

        terminal.draw(|f| field.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Subjects"));
        assert!(text.contains('6'));
    }
}
