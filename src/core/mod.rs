//! # Core Application Logic
//!
//! This module contains the calculator's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • RowStore (table)     │
//!                    │  • compute_summary()    │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No UI. No rendering.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │   Report   │
//!            │  Adapter   │            │  (layout + │
//!            │ (ratatui)  │            │  renderer) │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`grade`]: `GradeSymbol` and the grade point table
//! - [`rows`]: `RowStore`, the ordered subject rows and the count control
//! - [`summary`]: `compute_summary`, the CGPA engine
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod grade;
pub mod rows;
pub mod state;
pub mod summary;

pub use grade::{GradeError, GradeSymbol};
pub use rows::{RowError, RowStore, SubjectEntry};
pub use summary::{CgpaTier, PerformanceBand, Summary, compute_summary};
