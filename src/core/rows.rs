//! # Row Store
//!
//! The ordered list of subject entries behind the table, plus the value of
//! the "number of subjects" control that sizes it.
//!
//! ```text
//! RowStore
//! ├── entries: Vec<SubjectEntry>   // insertion order
//! └── desired_count: usize         // what the count control shows
//! ```
//!
//! Every mutation leaves `desired_count == entries.len()`, so the count
//! control and the table can never drift apart.

use log::debug;
use std::fmt;

use super::grade::GradeSymbol;

/// Upper bound on the number of rows the table can hold.
pub const MAX_SUBJECTS: usize = 200;

/// One row of the table.
///
/// `credits` is kept as the raw field text. The engine only counts it when
/// it parses as a finite, non-negative number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectEntry {
    pub name: String,
    pub credits: String,
    pub grade: GradeSymbol,
}

impl SubjectEntry {
    pub fn new(name: impl Into<String>, credits: impl Into<String>, grade: GradeSymbol) -> Self {
        Self {
            name: name.into(),
            credits: credits.into(),
            grade,
        }
    }

    /// The credit value, if the field holds a usable number.
    pub fn parsed_credits(&self) -> Option<f64> {
        self.credits
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|c| c.is_finite() && *c >= 0.0)
    }

    pub fn has_empty_credits(&self) -> bool {
        self.credits.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// The desired count was not a positive integer.
    InvalidCount(String),
    /// The table would grow past `MAX_SUBJECTS`.
    TooManySubjects(usize),
    /// Quick fill found no row with an empty credit field.
    NoEmptyCreditField,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::InvalidCount(input) => {
                write!(f, "Enter a valid number of subjects (got '{input}')")
            }
            RowError::TooManySubjects(n) => {
                write!(f, "At most {MAX_SUBJECTS} subjects are supported (got {n})")
            }
            RowError::NoEmptyCreditField => {
                write!(f, "All visible credit fields are already filled")
            }
        }
    }
}

impl std::error::Error for RowError {}

/// Parses the count control's text as a positive integer no larger than
/// `MAX_SUBJECTS`.
pub fn parse_count(input: &str) -> Result<usize, RowError> {
    match input.trim().parse::<usize>() {
        Ok(n) if n > MAX_SUBJECTS => Err(RowError::TooManySubjects(n)),
        Ok(n) if n > 0 => Ok(n),
        _ => Err(RowError::InvalidCount(input.trim().to_string())),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowStore {
    entries: Vec<SubjectEntry>,
    desired_count: usize,
}

impl RowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `count` blank rows, capped at `MAX_SUBJECTS`.
    pub fn with_blank_rows(count: usize) -> Self {
        let mut store = Self::new();
        store.resize(count.min(MAX_SUBJECTS));
        store
    }

    pub fn from_entries(entries: Vec<SubjectEntry>) -> Self {
        let desired_count = entries.len();
        Self {
            entries,
            desired_count,
        }
    }

    pub fn entries(&self) -> &[SubjectEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&SubjectEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value currently shown by the count control.
    pub fn desired_count(&self) -> usize {
        self.desired_count
    }

    /// Grows or shrinks the table to the count typed into the control.
    ///
    /// Rejects anything that is not a positive integer without touching
    /// the rows. Existing rows keep their values; only trailing rows are
    /// added or dropped.
    pub fn set_desired_count(&mut self, input: &str) -> Result<usize, RowError> {
        let n = parse_count(input)?;
        self.resize(n);
        Ok(n)
    }

    pub fn append_one(&mut self) -> Result<usize, RowError> {
        let n = self.entries.len() + 1;
        if n > MAX_SUBJECTS {
            return Err(RowError::TooManySubjects(n));
        }
        self.resize(n);
        Ok(n)
    }

    /// Removes the row at `index`. Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<SubjectEntry> {
        if index >= self.entries.len() {
            debug!("remove_at({index}) ignored: only {} rows", self.entries.len());
            return None;
        }
        let removed = self.entries.remove(index);
        self.desired_count = self.entries.len();
        Some(removed)
    }

    /// Puts `value` into the first row whose credit field is empty.
    ///
    /// A blank `value` does nothing and returns `Ok(None)`. Otherwise
    /// returns the index of the filled row.
    pub fn quick_fill_credits(&mut self, value: &str) -> Result<Option<usize>, RowError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        let (index, entry) = self
            .entries
            .iter_mut()
            .enumerate()
            .find(|(_, e)| e.has_empty_credits())
            .ok_or(RowError::NoEmptyCreditField)?;
        entry.credits = value.to_string();
        Ok(Some(index))
    }

    pub fn set_name(&mut self, index: usize, name: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.name = name.into();
        }
    }

    pub fn set_credits(&mut self, index: usize, credits: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.credits = credits.into();
        }
    }

    pub fn set_grade(&mut self, index: usize, grade: GradeSymbol) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.grade = grade;
        }
    }

    fn resize(&mut self, n: usize) {
        if n != self.entries.len() {
            debug!("Resizing row store {} -> {}", self.entries.len(), n);
        }
        self.entries.resize_with(n, SubjectEntry::default);
        self.desired_count = n;
    }
}
