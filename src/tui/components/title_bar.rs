//! # TitleBar Component
//!
//! Top status bar: application name, row count and the latest status
//! message.
//!
//! TitleBar is purely presentational. It receives all data as props and
//! has no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.rows.len(), app.status_message.clone());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"CGPA Calculator (3 subjects) | CGPA: 8.50"`
//! 2. **Default**: `"CGPA Calculator (3 subjects)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Number of rows in the table
    pub subject_count: usize,
    /// Status message (e.g., "CGPA: 8.50", "Removed row 2")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(subject_count: usize, status_message: String) -> Self {
        Self {
            subject_count,
            status_message,
        }
    }

    fn text(&self) -> String {
        let noun = if self.subject_count == 1 { "subject" } else { "subjects" };
        if self.status_message.is_empty() {
            format!("CGPA Calculator ({} {})", self.subject_count, noun)
        } else {
            format!(
                "CGPA Calculator ({} {}) | {}",
                self.subject_count, noun, self.status_message
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(Color::Rgb(102, 126, 234))
            .add_modifier(Modifier::BOLD);
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}
