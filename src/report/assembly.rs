//! Turns rows and a summary into the plain table the report prints.

use chrono::NaiveDate;

use super::ExportError;
use crate::core::grade::GradeSymbol;
use crate::core::rows::SubjectEntry;
use crate::core::summary::{PerformanceBand, Summary};

/// Names longer than this are shortened in the table.
pub const MAX_SUBJECT_CHARS: usize = 25;
const TRUNCATED_SUBJECT_CHARS: usize = 22;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub subject: String,
    pub credits: f64,
    pub grade: GradeSymbol,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub student_name: String,
    pub date: NaiveDate,
    pub rows: Vec<ReportRow>,
    pub summary: Summary,
    pub performance: PerformanceBand,
    pub footer: String,
}

impl Report {
    /// Date as printed in the header, `dd/mm/yyyy`.
    pub fn date_label(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    pub fn performance_label(&self) -> &'static str {
        self.performance.label()
    }

    pub fn file_name(&self) -> String {
        report_file_name(&self.student_name, self.date)
    }
}

pub fn build_report(
    entries: &[SubjectEntry],
    summary: Summary,
    student_name: &str,
    date: NaiveDate,
    title: &str,
    footer: &str,
) -> Result<Report, ExportError> {
    let student_name = student_name.trim();
    if student_name.is_empty() {
        return Err(ExportError::MissingName);
    }

    let rows = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let credits = entry.parsed_credits().unwrap_or(0.0);
            ReportRow {
                subject: display_subject(&entry.name, i),
                credits,
                grade: entry.grade,
                points: credits * f64::from(entry.grade.grade_point()),
            }
        })
        .collect();

    Ok(Report {
        title: title.to_string(),
        student_name: student_name.to_string(),
        date,
        rows,
        performance: summary.performance(),
        summary,
        footer: footer.to_string(),
    })
}

/// Blank names become `Subject N`; long names are cut to fit the column.
fn display_subject(name: &str, index: usize) -> String {
    let name = name.trim();
    if name.is_empty() {
        return format!("Subject {}", index + 1);
    }
    if name.chars().count() > MAX_SUBJECT_CHARS {
        let head: String = name.chars().take(TRUNCATED_SUBJECT_CHARS).collect();
        return format!("{head}...");
    }
    name.to_string()
}

/// Keeps ASCII letters, digits and whitespace, then joins words with `_`.
pub fn sanitize_name(name: &str) -> String {
    let kept: String = name
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("_")
}

/// `CGPA_Report_<name>_<dd-mm-yyyy>.pdf`
pub fn report_file_name(student_name: &str, date: NaiveDate) -> String {
    let mut name = sanitize_name(student_name);
    if name.is_empty() {
        name = "Student".to_string();
    }
    format!("CGPA_Report_{}_{}.pdf", name, date.format("%d-%m-%Y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::summary::compute_summary;
    use crate::test_support::sample_entries;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    fn sample_report() -> Report {
        let entries = sample_entries();
        build_report(
            &entries,
            compute_summary(&entries),
            " Asha Rao ",
            date(),
            "CGPA Calculator Report",
            "footer",
        )
        .unwrap()
    }

    #[test]
    fn test_rows_carry_points_and_default_names() {
        let report = sample_report();
        assert_eq!(report.rows.len(), 4);
        assert_eq!(report.rows[0].subject, "Mathematics");
        assert_eq!(report.rows[0].points, 40.0);
        assert_eq!(report.rows[2].subject, "Subject 3");
        assert_eq!(report.rows[2].points, 18.0);
        // QUALIFIED rows are listed but score nothing
        assert_eq!(report.rows[3].grade, GradeSymbol::Qualified);
        assert_eq!(report.rows[3].points, 0.0);
    }

    #[test]
    fn test_invalid_credits_print_as_zero() {
        let entries = vec![SubjectEntry::new("Lab", "n/a", GradeSymbol::A)];
        let report = build_report(&entries, compute_summary(&entries), "A", date(), "", "")
            .unwrap();
        assert_eq!(report.rows[0].credits, 0.0);
        assert_eq!(report.rows[0].points, 0.0);
    }

    #[test]
    fn test_summary_and_band() {
        let report = sample_report();
        // (4*10 + 3*7 + 2*9) / 9 = 8.777... → 8.78
        assert_eq!(report.summary.total_credits, 9.0);
        assert_eq!(report.summary.cgpa, Some(8.78));
        assert_eq!(report.performance, PerformanceBand::VeryGood);
        assert_eq!(report.performance_label(), "Very Good");
        assert_eq!(report.student_name, "Asha Rao");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let entries = sample_entries();
        let err = build_report(&entries, compute_summary(&entries), "  ", date(), "", "")
            .unwrap_err();
        assert!(matches!(err, ExportError::MissingName));
    }

    #[test]
    fn test_long_subject_names_are_shortened() {
        assert_eq!(display_subject(&"x".repeat(25), 0), "x".repeat(25));
        assert_eq!(
            display_subject("Introduction to Quantum Mechanics", 0),
            "Introduction to Quantu..."
        );
    }

    #[test]
    fn test_no_cgpa_needs_improvement() {
        let report = build_report(&[], compute_summary(&[]), "A", date(), "", "").unwrap();
        assert_eq!(report.summary.cgpa, None);
        assert_eq!(report.performance, PerformanceBand::NeedsImprovement);
        assert_eq!(report.performance_label(), "Needs Improvement");
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("  Asha  Rao "), "Asha_Rao");
        assert_eq!(sanitize_name("O'Brien-Smith, Jr."), "OBrienSmith_Jr");
        assert_eq!(sanitize_name("Zoë 2"), "Zo_2");
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name("Asha Rao", date()),
            "CGPA_Report_Asha_Rao_07-03-2025.pdf"
        );
        assert_eq!(
            report_file_name("!!!", date()),
            "CGPA_Report_Student_07-03-2025.pdf"
        );
        assert_eq!(sample_report().date_label(), "07/03/2025");
    }
}
