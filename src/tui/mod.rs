//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm key ─▶ TuiEvent ─▶ focused widget ─▶ Action ─▶ update() ─▶ Effect
//!                                                                     │
//!                                    Effect::Export ─▶ export_report()┘
//! ```
//!
//! The loop only redraws after an event arrived; nothing here animates.

mod component;
mod components;
mod event;
mod ui;

use chrono::{Local, NaiveDate};
use log::info;
use ratatui::DefaultTerminal;
use std::time::Duration;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::report::{DocumentRenderer, ExportRequest, PdfRenderer, export_report};
use crate::tui::component::EventHandler;
use crate::tui::components::{FieldEvent, FieldKind, SubjectTableState, TableEvent, TextField};
use crate::tui::event::{TuiEvent, poll_event_timeout};

/// Which widget receives typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Count,
    QuickCredit,
    Table,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Count => Focus::QuickCredit,
            Focus::QuickCredit => Focus::Table,
            Focus::Table => Focus::Count,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Count => Focus::Table,
            Focus::QuickCredit => Focus::Count,
            Focus::Table => Focus::QuickCredit,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub count_field: TextField,
    pub quick_credit: TextField,
    pub table: SubjectTableState,
    /// Student name overlay shown before exporting (None = hidden)
    pub name_prompt: Option<TextField>,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let mut count_field = TextField::new(" Number of subjects ", FieldKind::Integer);
        count_field.set_text(app.rows.desired_count().to_string());
        Self {
            focus: Focus::Table, // User expects to start typing subjects
            count_field,
            quick_credit: TextField::new(" Quick credit (Enter fills next empty) ", FieldKind::Decimal),
            table: SubjectTableState::new(),
            name_prompt: None,
        }
    }

    /// Brings widget props in line with the app after an update.
    ///
    /// The count field mirrors the row count unless the user is typing in it.
    pub fn sync(&mut self, app: &App) {
        if self.focus != Focus::Count {
            self.count_field
                .set_text(app.rows.desired_count().to_string());
        }
        self.table.clamp(app.rows.len());

        let overlay = self.name_prompt.is_some();
        self.count_field.focused = !overlay && self.focus == Focus::Count;
        self.quick_credit.focused = !overlay && self.focus == Focus::QuickCredit;
        if let Some(prompt) = self.name_prompt.as_mut() {
            prompt.focused = true;
        }
    }
}

fn name_prompt() -> TextField {
    let mut field = TextField::new(" Student name (Enter to export, Esc to cancel) ", FieldKind::Text);
    field.focused = true;
    field
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app);
    let renderer = PdfRenderer;

    info!(
        "Starting TUI with {} row(s), reports go to {}",
        app.rows.len(),
        app.output_dir.display()
    );

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui, &renderer);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    renderer: &dyn DocumentRenderer,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            tui.sync(app);
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(event) = poll_event_timeout(Duration::from_millis(500))? else {
            continue;
        };
        needs_redraw = true;

        if dispatch(app, tui, event, renderer, Local::now().date_naive()) {
            info!("Quit requested");
            return Ok(());
        }
    }
}

/// Routes one event to the right widget or command. Returns true to quit.
pub fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    renderer: &dyn DocumentRenderer,
    today: NaiveDate,
) -> bool {
    // The name prompt captures all input while it is open
    if let Some(prompt) = tui.name_prompt.as_mut() {
        match event {
            TuiEvent::Quit => return apply(app, tui, Action::Quit, renderer, today),
            TuiEvent::Escape => {
                tui.name_prompt = None;
                app.status_message = "Export cancelled".to_string();
            }
            _ => {
                if let Some(FieldEvent::Submit(name)) = prompt.handle_event(&event) {
                    tui.name_prompt = None;
                    return apply(app, tui, Action::RequestExport(name), renderer, today);
                }
            }
        }
        return false;
    }

    match event {
        TuiEvent::Quit | TuiEvent::Escape => apply(app, tui, Action::Quit, renderer, today),
        TuiEvent::AddRow => apply(app, tui, Action::AppendRow, renderer, today),
        TuiEvent::RemoveRow => {
            let row = tui.table.selected;
            apply(app, tui, Action::RemoveRow(row), renderer, today)
        }
        TuiEvent::Compute => apply(app, tui, Action::Compute, renderer, today),
        TuiEvent::Export => {
            if app.can_export() {
                tui.name_prompt = Some(name_prompt());
                false
            } else {
                // Let the reducer explain why exporting is not possible yet
                apply(app, tui, Action::RequestExport(String::new()), renderer, today)
            }
        }
        TuiEvent::NextFocus => {
            tui.focus = tui.focus.next();
            false
        }
        TuiEvent::PrevFocus => {
            tui.focus = tui.focus.prev();
            false
        }
        TuiEvent::Resize => false,
        other => match tui.focus {
            Focus::Count => handle_count_field(app, tui, &other, renderer, today),
            Focus::QuickCredit => {
                if let Some(FieldEvent::Submit(value)) = tui.quick_credit.handle_event(&other) {
                    let quit = apply(app, tui, Action::QuickFillCredits(value), renderer, today);
                    if app.error.is_none() {
                        tui.quick_credit.clear();
                    }
                    return quit;
                }
                false
            }
            Focus::Table => {
                let action = match tui.table.handle_event(&other, app.rows.entries()) {
                    Some(TableEvent::EditName { row, text }) => Action::EditName { row, text },
                    Some(TableEvent::EditCredits { row, text }) => Action::EditCredits { row, text },
                    Some(TableEvent::SetGrade { row, grade }) => Action::SetGrade { row, grade },
                    None => return false,
                };
                apply(app, tui, action, renderer, today)
            }
        },
    }
}

/// Up/Down step the count like a spinner; Enter applies what was typed.
fn handle_count_field(
    app: &mut App,
    tui: &mut TuiState,
    event: &TuiEvent,
    renderer: &dyn DocumentRenderer,
    today: NaiveDate,
) -> bool {
    let current = app.rows.desired_count();
    let input = match event {
        TuiEvent::CursorUp => (current + 1).to_string(),
        TuiEvent::CursorDown => current.saturating_sub(1).to_string(),
        _ => match tui.count_field.handle_event(event) {
            Some(FieldEvent::Submit(text)) => text,
            _ => return false,
        },
    };
    let quit = apply(app, tui, Action::SetDesiredCount(input), renderer, today);
    if app.error.is_none() {
        tui.count_field
            .set_text(app.rows.desired_count().to_string());
    }
    quit
}

/// Runs an action through the reducer and carries out the resulting effect.
fn apply(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    renderer: &dyn DocumentRenderer,
    today: NaiveDate,
) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Quit => true,
        Effect::PromptName => {
            tui.name_prompt = Some(name_prompt());
            false
        }
        Effect::Export { student_name } => {
            let request = ExportRequest {
                entries: app.rows.entries(),
                student_name: &student_name,
                date: today,
                title: &app.report_title,
                footer: &app.report_footer,
                output_dir: &app.output_dir,
            };
            let outcome = match export_report(renderer, &request) {
                Ok(path) => Action::ExportFinished(path),
                Err(e) => Action::ExportFailed(e.to_string()),
            };
            apply(app, tui, outcome, renderer, today)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grade::GradeSymbol;
    use crate::test_support::{FailingRenderer, RecordingRenderer, test_app};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn send(app: &mut App, tui: &mut TuiState, renderer: &dyn DocumentRenderer, events: &[TuiEvent]) -> bool {
        let mut quit = false;
        for event in events {
            quit = dispatch(app, tui, event.clone(), renderer, today());
            tui.sync(app);
        }
        quit
    }

    fn typed(text: &str) -> Vec<TuiEvent> {
        text.chars().map(TuiEvent::InputChar).collect()
    }

    #[test]
    fn test_count_field_resizes_table() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        let renderer = RecordingRenderer::default();

        let mut events = vec![TuiEvent::PrevFocus, TuiEvent::PrevFocus, TuiEvent::Backspace];
        events.extend(typed("3"));
        events.push(TuiEvent::Submit);
        send(&mut app, &mut tui, &renderer, &events);

        assert_eq!(tui.focus, Focus::Count);
        assert_eq!(app.rows.len(), 3);
        assert_eq!(tui.count_field.buffer, "3");
    }

    #[test]
    fn test_count_spinner_and_invalid_zero() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        tui.focus = Focus::Count;
        let renderer = RecordingRenderer::default();

        send(&mut app, &mut tui, &renderer, &[TuiEvent::CursorUp, TuiEvent::CursorUp]);
        assert_eq!(app.rows.len(), 3);

        send(&mut app, &mut tui, &renderer, &[TuiEvent::CursorDown]);
        assert_eq!(app.rows.len(), 2);

        send(
            &mut app,
            &mut tui,
            &renderer,
            &[TuiEvent::CursorDown, TuiEvent::CursorDown],
        );
        assert_eq!(app.rows.len(), 1);
        assert!(app.error.is_some(), "zero subjects must be rejected");
    }

    #[test]
    fn test_remove_row_updates_count_field() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        let renderer = RecordingRenderer::default();

        send(
            &mut app,
            &mut tui,
            &renderer,
            &[TuiEvent::AddRow, TuiEvent::AddRow, TuiEvent::RemoveRow],
        );
        assert_eq!(app.rows.len(), 2);
        assert_eq!(tui.count_field.buffer, "2");
    }

    #[test]
    fn test_quick_credit_fills_and_clears() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        tui.focus = Focus::QuickCredit;
        let renderer = RecordingRenderer::default();

        let mut events = typed("3.5");
        events.push(TuiEvent::Submit);
        send(&mut app, &mut tui, &renderer, &events);
        assert_eq!(app.rows.entries()[0].credits, "3.5");
        assert!(tui.quick_credit.buffer.is_empty());

        // No empty field left: value stays so the user can add a row
        let mut events = typed("2");
        events.push(TuiEvent::Submit);
        send(&mut app, &mut tui, &renderer, &events);
        assert!(app.error.is_some());
        assert_eq!(tui.quick_credit.buffer, "2");
    }

    #[test]
    fn test_table_editing() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        let renderer = RecordingRenderer::default();

        let mut events = typed("Maths");
        events.push(TuiEvent::CursorRight);
        events.extend(typed("4"));
        events.push(TuiEvent::CursorRight);
        events.extend(typed("--"));
        send(&mut app, &mut tui, &renderer, &events);

        let entry = &app.rows.entries()[0];
        assert_eq!(entry.name, "Maths");
        assert_eq!(entry.credits, "4");
        assert_eq!(entry.grade, GradeSymbol::D);
    }

    #[test]
    fn test_export_flow() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        let renderer = RecordingRenderer::default();
        app.rows.set_credits(0, "4");

        // Export before computing is refused
        send(&mut app, &mut tui, &renderer, &[TuiEvent::Export]);
        assert!(tui.name_prompt.is_none());
        assert!(app.error.is_some());

        send(&mut app, &mut tui, &renderer, &[TuiEvent::Compute, TuiEvent::Export]);
        assert!(tui.name_prompt.is_some());

        // Blank name re-prompts
        send(&mut app, &mut tui, &renderer, &[TuiEvent::Submit]);
        assert!(tui.name_prompt.is_some());
        assert!(app.error.as_deref().unwrap().contains("Name is required"));

        let mut events = typed("Asha Rao");
        events.push(TuiEvent::Submit);
        send(&mut app, &mut tui, &renderer, &events);

        assert!(tui.name_prompt.is_none());
        let rendered = renderer.rendered.borrow();
        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].0.ends_with("CGPA_Report_Asha_Rao_01-06-2025.pdf"));
        assert_eq!(app.last_export.as_ref(), Some(&rendered[0].0));
    }

    #[test]
    fn test_export_failure_is_reported() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        let renderer = FailingRenderer;

        send(&mut app, &mut tui, &renderer, &[TuiEvent::Compute, TuiEvent::Export]);
        let mut events = typed("Asha");
        events.push(TuiEvent::Submit);
        let quit = send(&mut app, &mut tui, &renderer, &events);

        assert!(!quit);
        assert_eq!(app.status_message, "Export failed");
        assert!(app.error.as_deref().unwrap().contains("renderer unavailable"));
    }

    #[test]
    fn test_escape_closes_prompt_before_quitting() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        let renderer = RecordingRenderer::default();

        send(&mut app, &mut tui, &renderer, &[TuiEvent::Compute, TuiEvent::Export]);
        assert!(!send(&mut app, &mut tui, &renderer, &[TuiEvent::Escape]));
        assert!(tui.name_prompt.is_none());
        assert!(send(&mut app, &mut tui, &renderer, &[TuiEvent::Escape]));
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::Count.next(), Focus::QuickCredit);
        assert_eq!(Focus::Table.next(), Focus::Count);
        assert_eq!(Focus::Count.prev(), Focus::Table);
        assert_eq!(Focus::Table.prev().next(), Focus::Table);
    }
}
