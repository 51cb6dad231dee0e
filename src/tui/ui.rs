use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{SubjectTable, SummaryPanel, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([Length(1), Length(3), Min(5), Length(5), Length(1)]);
    let [title_area, fields_area, table_area, summary_area, help_area] =
        layout.areas(frame.area());

    TitleBar::new(app.rows.len(), app.status_message.clone()).render(frame, title_area);

    let [count_area, quick_area] =
        Layout::horizontal([Percentage(40), Percentage(60)]).areas(fields_area);
    tui.count_field.render(frame, count_area);
    tui.quick_credit.render(frame, quick_area);

    let table_focused = tui.focus == Focus::Table && tui.name_prompt.is_none();
    SubjectTable::new(app.rows.entries(), &mut tui.table, table_focused).render(frame, table_area);

    SummaryPanel::new(app.summary.as_ref(), app.error.as_deref()).render(frame, summary_area);

    frame.render_widget(Paragraph::new(help_line(tui)), help_area);

    // Name prompt overlays everything else
    if let Some(prompt) = tui.name_prompt.as_mut() {
        let area = centered_box(60, 3, frame.area());
        frame.render_widget(Clear, area);
        prompt.render(frame, area);
    }
}

fn help_line(tui: &TuiState) -> Line<'static> {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(Color::DarkGray);

    let local: &[(&str, &str)] = if tui.name_prompt.is_some() {
        &[("Enter", "export"), ("Esc", "cancel")]
    } else {
        match tui.focus {
            Focus::Count => &[("Enter", "apply"), ("↑↓", "step")],
            Focus::QuickCredit => &[("Enter", "fill next empty")],
            Focus::Table => &[("←→", "column"), ("↑↓", "row"), ("Space/-", "grade")],
        }
    };
    let global: &[(&str, &str)] = &[
        ("Tab", "focus"),
        ("^A", "add"),
        ("^X", "remove"),
        ("^G", "calculate"),
        ("^E", "export"),
        ("Esc", "quit"),
    ];

    let global = if tui.name_prompt.is_some() { &[][..] } else { global };
    let spans: Vec<Span<'static>> = local
        .iter()
        .chain(global)
        .flat_map(|(k, label)| {
            [
                Span::styled(k.to_string(), key),
                Span::styled(format!(" {label}  "), text),
            ]
        })
        .collect();
    Line::from(spans)
}

/// Fixed-size rect centered in `outer`, shrunk to fit when the terminal is small.
fn centered_box(width: u16, height: u16, outer: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(row);
    center
}
