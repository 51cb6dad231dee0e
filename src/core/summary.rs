//! # CGPA Engine
//!
//! Pure aggregation over the row store: credit-weighted mean of grade
//! points, plus the qualitative band the report prints next to it.

use log::warn;
use std::fmt;

use super::rows::SubjectEntry;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub total_credits: f64,
    pub total_points: f64,
    /// Rounded to two decimals. `None` when no weighted credits were entered.
    pub cgpa: Option<f64>,
}

impl Summary {
    /// Band for the CGPA. A missing CGPA falls through to the lowest band.
    pub fn performance(&self) -> PerformanceBand {
        self.cgpa
            .map_or(PerformanceBand::NeedsImprovement, PerformanceBand::from_cgpa)
    }

    pub fn tier(&self) -> CgpaTier {
        CgpaTier::from_cgpa(self.cgpa)
    }

    /// CGPA as shown to the user: two decimals, or `N/A`.
    pub fn cgpa_label(&self) -> String {
        match self.cgpa {
            Some(cgpa) => format!("{cgpa:.2}"),
            None => "N/A".to_string(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Credits: {}", self.total_credits)?;
        writeln!(f, "Total Points: {}", self.total_points)?;
        write!(f, "CGPA: {}", self.cgpa_label())
    }
}

/// Computes totals and CGPA for the given rows.
///
/// Rows with unusable credits or a QUALIFIED grade are skipped, as is any
/// row that would push a total past the range of `f64`.
pub fn compute_summary(entries: &[SubjectEntry]) -> Summary {
    let (total_credits, total_points) = entries
        .iter()
        .filter(|e| e.grade.is_weighted())
        .filter_map(|e| e.parsed_credits().map(|c| (c, e.grade)))
        .fold((0.0, 0.0), |(credits, points), (c, grade)| {
            let next_credits = credits + c;
            let next_points = points + c * f64::from(grade.grade_point());
            if next_credits.is_finite() && next_points.is_finite() {
                (next_credits, next_points)
            } else {
                warn!("Skipping row with {c} credits: totals would overflow");
                (credits, points)
            }
        });

    let cgpa = (total_credits > 0.0).then(|| round2(total_points / total_credits));

    Summary {
        total_credits,
        total_points,
        cgpa,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceBand {
    Excellent,
    VeryGood,
    Good,
    Average,
    NeedsImprovement,
}

impl PerformanceBand {
    pub fn from_cgpa(cgpa: f64) -> Self {
        if cgpa >= 9.0 {
            PerformanceBand::Excellent
        } else if cgpa >= 8.0 {
            PerformanceBand::VeryGood
        } else if cgpa >= 7.0 {
            PerformanceBand::Good
        } else if cgpa >= 6.0 {
            PerformanceBand::Average
        } else {
            PerformanceBand::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceBand::Excellent => "Excellent",
            PerformanceBand::VeryGood => "Very Good",
            PerformanceBand::Good => "Good",
            PerformanceBand::Average => "Average",
            PerformanceBand::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for PerformanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Colour tier the CGPA is highlighted in, shared by the TUI and the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CgpaTier {
    /// 8.5 and above
    High,
    /// 7.0 and above
    Good,
    /// 6.0 and above
    Fair,
    /// Below 6.0, or no CGPA
    Low,
}

impl CgpaTier {
    pub fn from_cgpa(cgpa: Option<f64>) -> Self {
        match cgpa {
            Some(c) if c >= 8.5 => CgpaTier::High,
            Some(c) if c >= 7.0 => CgpaTier::Good,
            Some(c) if c >= 6.0 => CgpaTier::Fair,
            _ => CgpaTier::Low,
        }
    }
}
