//! # SummaryPanel Component
//!
//! Shows the last computed result, the performance band, and any error
//! the user needs to correct. Stateless; everything arrives as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::summary::{CgpaTier, Summary};
use crate::tui::component::Component;

pub struct SummaryPanel<'a> {
    pub summary: Option<&'a Summary>,
    pub error: Option<&'a str>,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(summary: Option<&'a Summary>, error: Option<&'a str>) -> Self {
        Self { summary, error }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        match self.summary {
            Some(summary) => {
                lines.push(Line::from(format!(
                    "Total Credits: {}   Total Points: {}",
                    summary.total_credits, summary.total_points
                )));
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("CGPA: {}", summary.cgpa_label()),
                        Style::default()
                            .fg(tier_color(summary.tier()))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  ({})", summary.performance()),
                        Style::default().fg(Color::Gray),
                    ),
                ]));
            }
            None => lines.push(Line::styled(
                "Press Ctrl+G to calculate your CGPA",
                Style::default().fg(Color::DarkGray),
            )),
        }
        if let Some(error) = self.error {
            lines.push(Line::styled(
                format!("⚠ {error}"),
                Style::default().fg(Color::Red),
            ));
        }
        lines
    }
}

fn tier_color(tier: CgpaTier) -> Color {
    match tier {
        CgpaTier::High => Color::Green,
        CgpaTier::Good => Color::Blue,
        CgpaTier::Fair => Color::Yellow,
        CgpaTier::Low => Color::Red,
    }
}

impl Component for SummaryPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Result ");
        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
