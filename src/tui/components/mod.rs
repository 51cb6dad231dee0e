//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: top status line with row count and status message
//! - `SummaryPanel`: totals, CGPA, performance band and errors
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TextField`: single-line input (count, quick credit, student name)
//! - `SubjectTable`: the editable rows, with selection and active column
//!
//! Components receive external data as props rather than reaching into
//! `App`, which keeps them testable with ratatui's `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs
//! ├── summary_panel.rs
//! ├── text_field.rs
//! └── subject_table.rs
//! ```

pub mod subject_table;
pub mod summary_panel;
pub mod text_field;
mod title_bar;

pub use subject_table::{SubjectTable, SubjectTableState, TableEvent};
pub use summary_panel::SummaryPanel;
pub use text_field::{FieldEvent, FieldKind, TextField};
pub use title_bar::TitleBar;
