//! # Report Export
//!
//! Builds the downloadable CGPA report. The pipeline is split so that
//! everything except the final paint is plain data:
//!
//! ```text
//! rows + Summary ──build_report()──▶ Report ──layout_report()──▶ LaidOutDocument
//!                                                                     │
//!                                              DocumentRenderer::render()
//!                                                                     ▼
//!                                        <output_dir>/CGPA_Report_<name>_<dd-mm-yyyy>.pdf
//! ```
//!
//! ## Modules
//!
//! - [`assembly`]: `Report` rows, display names, file naming
//! - [`layout`]: page-relative drawing primitives
//! - [`pdf`]: `PdfRenderer`, the printpdf backend

pub mod assembly;
pub mod layout;
pub mod pdf;

use chrono::NaiveDate;
use log::info;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::rows::SubjectEntry;
use crate::core::summary::compute_summary;

pub use assembly::{Report, ReportRow, build_report, report_file_name, sanitize_name};
pub use layout::{DrawOp, LaidOutDocument, Page, layout_report};
pub use pdf::PdfRenderer;

#[derive(Debug)]
pub enum ExportError {
    /// No student name was given. The user should be asked again.
    MissingName,
    /// Could not create the output directory or file.
    Io(std::io::Error),
    /// The document backend failed.
    Render(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::MissingName => write!(f, "Name is required to generate the PDF report"),
            ExportError::Io(e) => write!(f, "export I/O error: {e}"),
            ExportError::Render(msg) => write!(f, "render error: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Paints a laid-out document to `path`.
pub trait DocumentRenderer {
    fn render(&self, document: &LaidOutDocument, path: &Path) -> Result<(), ExportError>;
}

/// Everything needed to produce one report file.
pub struct ExportRequest<'a> {
    pub entries: &'a [SubjectEntry],
    pub student_name: &'a str,
    pub date: NaiveDate,
    pub title: &'a str,
    pub footer: &'a str,
    pub output_dir: &'a Path,
}

/// Builds, lays out and renders a report, returning the written path.
///
/// Totals are recomputed from `entries` so the file always matches the
/// rows as they are now.
pub fn export_report(
    renderer: &dyn DocumentRenderer,
    request: &ExportRequest<'_>,
) -> Result<PathBuf, ExportError> {
    let summary = compute_summary(request.entries);
    let report = build_report(
        request.entries,
        summary,
        request.student_name,
        request.date,
        request.title,
        request.footer,
    )?;
    let document = layout_report(&report);

    fs::create_dir_all(request.output_dir).map_err(ExportError::Io)?;
    let path = request.output_dir.join(report.file_name());
    info!(
        "Exporting report for {} ({} rows) to {}",
        report.student_name,
        report.rows.len(),
        path.display()
    );
    renderer.render(&document, &path)?;
    Ok(path)
}
