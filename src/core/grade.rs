//! # Grade Symbols
//!
//! The closed set of letter grades a subject can receive, and the grade
//! point each one is worth.
//!
//! ```text
//! A+ → 10   A → 9   B+ → 8   B → 7   C+ → 6   C → 5   D+ → 4   D → 3
//! QUALIFIED → 0 (pass/fail, never weighted)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GradeSymbol {
    #[default]
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "QUALIFIED")]
    Qualified,
}

impl GradeSymbol {
    /// Every symbol, in the order the grade selector lists them.
    pub const ALL: [GradeSymbol; 9] = [
        GradeSymbol::APlus,
        GradeSymbol::A,
        GradeSymbol::BPlus,
        GradeSymbol::B,
        GradeSymbol::CPlus,
        GradeSymbol::C,
        GradeSymbol::DPlus,
        GradeSymbol::D,
        GradeSymbol::Qualified,
    ];

    pub fn grade_point(self) -> u8 {
        match self {
            GradeSymbol::APlus => 10,
            GradeSymbol::A => 9,
            GradeSymbol::BPlus => 8,
            GradeSymbol::B => 7,
            GradeSymbol::CPlus => 6,
            GradeSymbol::C => 5,
            GradeSymbol::DPlus => 4,
            GradeSymbol::D => 3,
            GradeSymbol::Qualified => 0,
        }
    }

    /// Pass/fail grades carry no weight in the average.
    pub fn is_weighted(self) -> bool {
        self != GradeSymbol::Qualified
    }

    pub fn label(self) -> &'static str {
        match self {
            GradeSymbol::APlus => "A+",
            GradeSymbol::A => "A",
            GradeSymbol::BPlus => "B+",
            GradeSymbol::B => "B",
            GradeSymbol::CPlus => "C+",
            GradeSymbol::C => "C",
            GradeSymbol::DPlus => "D+",
            GradeSymbol::D => "D",
            GradeSymbol::Qualified => "QUALIFIED",
        }
    }

    /// Next symbol in selector order, wrapping from QUALIFIED back to A+.
    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous symbol in selector order, wrapping from A+ to QUALIFIED.
    pub fn prev(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|g| *g == self).unwrap_or(0)
    }
}

impl fmt::Display for GradeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when text that should name a grade does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeError {
    /// The symbol is outside the known grade table. Indicates corrupted
    /// input, since the selector only ever offers known symbols.
    DataIntegrity(String),
}

impl fmt::Display for GradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeError::DataIntegrity(symbol) => {
                write!(f, "data integrity error: unknown grade symbol '{symbol}'")
            }
        }
    }
}

impl std::error::Error for GradeError {}

impl FromStr for GradeSymbol {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.label() == normalized)
            .ok_or_else(|| GradeError::DataIntegrity(s.to_string()))
    }
}
