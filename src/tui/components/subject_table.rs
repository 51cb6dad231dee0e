//! # Subject Table Component
//!
//! The editable table of subjects. Follows the persistent state + transient
//! wrapper pattern:
//! - `SubjectTableState` lives in `TuiState` (selection, active column)
//! - `SubjectTable` is created each frame with the rows borrowed from `App`
//!
//! Editing never touches the rows directly. Keys become `TableEvent`s
//! carrying the new cell value, which the event loop turns into actions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Cell, Row, Table, TableState};

use crate::core::grade::GradeSymbol;
use crate::core::rows::SubjectEntry;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Credits,
    Grade,
}

impl Column {
    fn left(self) -> Self {
        match self {
            Column::Name | Column::Credits => Column::Name,
            Column::Grade => Column::Credits,
        }
    }

    fn right(self) -> Self {
        match self {
            Column::Name => Column::Credits,
            Column::Credits | Column::Grade => Column::Grade,
        }
    }
}

/// Events emitted by the table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    EditName { row: usize, text: String },
    EditCredits { row: usize, text: String },
    SetGrade { row: usize, grade: GradeSymbol },
}

pub struct SubjectTableState {
    pub selected: usize,
    pub column: Column,
    pub table_state: TableState,
}

impl Default for SubjectTableState {
    fn default() -> Self {
        Self::new()
    }
}

impl SubjectTableState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            column: Column::Name,
            table_state: TableState::default().with_selected(Some(0)),
        }
    }

    /// Keeps the selection inside the table after rows were added or removed.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
        self.table_state
            .select(if len == 0 { None } else { Some(self.selected) });
    }

    pub fn handle_event(&mut self, event: &TuiEvent, rows: &[SubjectEntry]) -> Option<TableEvent> {
        let row = self.selected;
        let entry = rows.get(row)?;

        match (event, self.column) {
            (TuiEvent::CursorUp, _) => {
                self.selected = self.selected.saturating_sub(1);
                self.clamp(rows.len());
                None
            }
            (TuiEvent::CursorDown | TuiEvent::Submit, _) => {
                self.selected = (self.selected + 1).min(rows.len() - 1);
                self.clamp(rows.len());
                None
            }
            (TuiEvent::CursorLeft, column) => {
                self.column = column.left();
                None
            }
            (TuiEvent::CursorRight, column) => {
                self.column = column.right();
                None
            }
            (TuiEvent::InputChar(' ' | '+'), Column::Grade) => Some(TableEvent::SetGrade {
                row,
                grade: entry.grade.next(),
            }),
            (TuiEvent::InputChar('-'), Column::Grade) => Some(TableEvent::SetGrade {
                row,
                grade: entry.grade.prev(),
            }),
            (TuiEvent::InputChar(c), Column::Name) if !c.is_control() => {
                let mut text = entry.name.clone();
                text.push(*c);
                Some(TableEvent::EditName { row, text })
            }
            (TuiEvent::InputChar(c), Column::Credits) if c.is_ascii_digit() || *c == '.' => {
                let mut text = entry.credits.clone();
                text.push(*c);
                Some(TableEvent::EditCredits { row, text })
            }
            (TuiEvent::Backspace, Column::Name) if !entry.name.is_empty() => {
                let mut text = entry.name.clone();
                text.pop();
                Some(TableEvent::EditName { row, text })
            }
            (TuiEvent::Backspace, Column::Credits) if !entry.credits.is_empty() => {
                let mut text = entry.credits.clone();
                text.pop();
                Some(TableEvent::EditCredits { row, text })
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the subject table.
pub struct SubjectTable<'a> {
    rows: &'a [SubjectEntry],
    state: &'a mut SubjectTableState,
    focused: bool,
}

impl<'a> SubjectTable<'a> {
    pub fn new(rows: &'a [SubjectEntry], state: &'a mut SubjectTableState, focused: bool) -> Self {
        Self {
            rows,
            state,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp(self.rows.len());

        let header = Row::new(vec!["#", "Subject", "Credits", "Grade"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let active = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let cell_style = |column: Column| {
                    if self.focused && i == self.state.selected && column == self.state.column {
                        active
                    } else {
                        Style::default()
                    }
                };
                let name = if entry.name.is_empty() {
                    Cell::from(format!("Subject {}", i + 1))
                        .style(cell_style(Column::Name).add_modifier(Modifier::DIM))
                } else {
                    Cell::from(entry.name.as_str()).style(cell_style(Column::Name))
                };
                let credits_style = if entry.has_empty_credits() || entry.parsed_credits().is_some() {
                    cell_style(Column::Credits)
                } else {
                    cell_style(Column::Credits).fg(Color::Red)
                };
                Row::new(vec![
                    Cell::from((i + 1).to_string()),
                    name,
                    Cell::from(entry.credits.as_str()).style(credits_style),
                    Cell::from(entry.grade.label()).style(cell_style(Column::Grade)),
                ])
            })
            .collect();

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(12),
                Constraint::Length(9),
                Constraint::Length(11),
            ],
        )
        .header(header)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .title(format!(" Subjects ({}) ", self.rows.len())),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray));

        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}
