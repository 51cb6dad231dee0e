//! # Application State
//!
//! Core business state for the calculator. This module contains domain
//! logic only, no TUI-specific types. Presentation state lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── rows: RowStore               // table contents + count control
//! ├── summary: Option<Summary>     // last computed result
//! ├── status_message: String       // status bar text
//! ├── error: Option<String>        // last user-correctable failure
//! ├── last_export: Option<PathBuf> // most recent report written
//! ├── output_dir: PathBuf          // where reports are written
//! ├── report_title: String
//! └── report_footer: String
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::path::PathBuf;

use crate::core::config::ResolvedConfig;
use crate::core::rows::RowStore;
use crate::core::summary::Summary;

pub struct App {
    pub rows: RowStore,
    pub summary: Option<Summary>,
    pub status_message: String,
    pub error: Option<String>,
    pub last_export: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub report_title: String,
    pub report_footer: String,
}

impl App {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            rows: RowStore::with_blank_rows(config.subject_count),
            summary: None,
            status_message: String::from("Enter your subjects, then press Ctrl+G"),
            error: None,
            last_export: None,
            output_dir: config.output_dir.clone(),
            report_title: config.report_title.clone(),
            report_footer: config.report_footer.clone(),
        }
    }

    /// Reports become available once a result has been computed.
    pub fn can_export(&self) -> bool {
        self.summary.is_some()
    }
}
