//! # Actions
//!
//! Everything that can happen in the calculator becomes an `Action`.
//! User types a count and presses Enter? That's `Action::SetDesiredCount`.
//! A report finished writing? That's `Action::ExportFinished(path)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the adapter must
//! perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};
use std::path::PathBuf;

use crate::core::grade::GradeSymbol;
use crate::core::state::App;
use crate::core::summary::compute_summary;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Count control submitted with the given text.
    SetDesiredCount(String),
    AppendRow,
    RemoveRow(usize),
    /// Quick credit entry submitted with the given text.
    QuickFillCredits(String),
    EditName { row: usize, text: String },
    EditCredits { row: usize, text: String },
    SetGrade { row: usize, grade: GradeSymbol },
    Compute,
    /// Export requested for the given student name.
    RequestExport(String),
    ExportFinished(PathBuf),
    ExportFailed(String),
    Quit,
}

/// Work the adapter must do after an `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Name was missing; ask for it again.
    PromptName,
    /// Build and write the report for this student.
    Export { student_name: String },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    app.error = None;

    match action {
        Action::SetDesiredCount(input) => {
            match app.rows.set_desired_count(&input) {
                Ok(n) => {
                    app.status_message = format!("{n} subject(s)");
                }
                Err(e) => {
                    warn!("Rejected subject count: {}", e);
                    app.error = Some(e.to_string());
                }
            }
            Effect::None
        }
        Action::AppendRow => {
            match app.rows.append_one() {
                Ok(n) => app.status_message = format!("{n} subject(s)"),
                Err(e) => {
                    warn!("Rejected new row: {}", e);
                    app.error = Some(e.to_string());
                }
            }
            Effect::None
        }
        Action::RemoveRow(index) => {
            if app.rows.remove_at(index).is_some() {
                app.status_message = format!("Removed row {}", index + 1);
            }
            Effect::None
        }
        Action::QuickFillCredits(value) => {
            match app.rows.quick_fill_credits(&value) {
                Ok(Some(index)) => {
                    app.status_message =
                        format!("Row {} credits set to {}", index + 1, value.trim());
                }
                Ok(None) => {}
                Err(e) => app.error = Some(e.to_string()),
            }
            Effect::None
        }
        Action::EditName { row, text } => {
            app.rows.set_name(row, text);
            Effect::None
        }
        Action::EditCredits { row, text } => {
            app.rows.set_credits(row, text);
            Effect::None
        }
        Action::SetGrade { row, grade } => {
            app.rows.set_grade(row, grade);
            Effect::None
        }
        Action::Compute => {
            let summary = compute_summary(app.rows.entries());
            info!(
                "Computed CGPA {} over {} credits",
                summary.cgpa_label(),
                summary.total_credits
            );
            app.status_message = format!("CGPA: {}", summary.cgpa_label());
            app.summary = Some(summary);
            Effect::None
        }
        Action::RequestExport(name) => {
            if !app.can_export() {
                app.error = Some("Calculate your CGPA before exporting".to_string());
                return Effect::None;
            }
            let name = name.trim();
            if name.is_empty() {
                app.error = Some("Name is required to generate the PDF report".to_string());
                return Effect::PromptName;
            }
            app.status_message = "Generating report...".to_string();
            Effect::Export {
                student_name: name.to_string(),
            }
        }
        Action::ExportFinished(path) => {
            info!("Report written to {}", path.display());
            app.status_message = format!("Saved {}", path.display());
            app.last_export = Some(path);
            Effect::None
        }
        Action::ExportFailed(message) => {
            warn!("Export failed: {}", message);
            app.status_message = "Export failed".to_string();
            app.error = Some(message);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
