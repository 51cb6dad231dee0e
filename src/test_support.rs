//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::core::config::ResolvedConfig;
use crate::core::grade::GradeSymbol;
use crate::core::rows::SubjectEntry;
use crate::core::state::App;
use crate::report::{DocumentRenderer, ExportError, LaidOutDocument};

/// A renderer that keeps every document it is handed instead of writing files.
#[derive(Default)]
pub struct RecordingRenderer {
    pub rendered: RefCell<Vec<(PathBuf, LaidOutDocument)>>,
}

impl DocumentRenderer for RecordingRenderer {
    fn render(&self, document: &LaidOutDocument, path: &Path) -> Result<(), ExportError> {
        self.rendered
            .borrow_mut()
            .push((path.to_path_buf(), document.clone()));
        Ok(())
    }
}

/// A renderer that always fails, for exercising error paths.
pub struct FailingRenderer;

impl DocumentRenderer for FailingRenderer {
    fn render(&self, _document: &LaidOutDocument, _path: &Path) -> Result<(), ExportError> {
        Err(ExportError::Render("renderer unavailable".to_string()))
    }
}

pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        subject_count: 1,
        output_dir: PathBuf::from("."),
        report_title: "CGPA Calculator Report".to_string(),
        report_footer: "Test footer".to_string(),
    }
}

/// Creates a test App with one blank row.
pub fn test_app() -> App {
    App::from_config(&test_config())
}

/// Three graded subjects and one pass/fail subject.
pub fn sample_entries() -> Vec<SubjectEntry> {
    vec![
        SubjectEntry::new("Mathematics", "4", GradeSymbol::APlus),
        SubjectEntry::new("Physics", "3", GradeSymbol::B),
        SubjectEntry::new("", "2", GradeSymbol::A),
        SubjectEntry::new("Sports", "1", GradeSymbol::Qualified),
    ]
}
