//! End-to-end tests through the public library API: rows in, report out.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use cgpa::core::{GradeSymbol, PerformanceBand, RowError, RowStore, SubjectEntry, compute_summary};
use cgpa::report::{
    DocumentRenderer, ExportError, ExportRequest, LaidOutDocument, PdfRenderer, build_report,
    export_report, layout_report,
};
use chrono::NaiveDate;

// ============================================================================
// Helper Functions
// ============================================================================

/// Collects every text run of a document, across pages
fn all_texts(document: &LaidOutDocument) -> Vec<String> {
    document
        .pages
        .iter()
        .flat_map(|page| page.texts().map(str::to_string).collect::<Vec<_>>())
        .collect()
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

#[derive(Default)]
struct CapturingRenderer {
    documents: RefCell<Vec<(PathBuf, LaidOutDocument)>>,
}

impl DocumentRenderer for CapturingRenderer {
    fn render(&self, document: &LaidOutDocument, path: &Path) -> Result<(), ExportError> {
        self.documents
            .borrow_mut()
            .push((path.to_path_buf(), document.clone()));
        Ok(())
    }
}

/// Fills a store the way a user would: set the count, quick-fill, edit.
fn filled_store() -> RowStore {
    let mut rows = RowStore::new();
    rows.set_desired_count("3").unwrap();
    for credits in ["4", "3", "1"] {
        rows.quick_fill_credits(credits).unwrap();
    }
    rows.set_name(0, "Data Structures");
    rows.set_grade(0, GradeSymbol::A);
    rows.set_name(1, "Operating Systems");
    rows.set_grade(1, "b+".parse().unwrap());
    rows.set_grade(2, GradeSymbol::Qualified);
    rows
}

// ============================================================================
// Row editing and calculation
// ============================================================================

#[test]
fn test_user_flow_computes_weighted_cgpa() {
    let mut rows = filled_store();
    assert_eq!(
        rows.quick_fill_credits("2"),
        Err(RowError::NoEmptyCreditField)
    );

    let summary = compute_summary(rows.entries());
    // 4*9 + 3*8 = 60 over 7 graded credits; the QUALIFIED credit is excluded
    assert_eq!(summary.total_credits, 7.0);
    assert_eq!(summary.total_points, 60.0);
    assert_eq!(summary.cgpa, Some(8.57));
    assert_eq!(summary.performance(), PerformanceBand::VeryGood);
}

#[test]
fn test_invalid_rows_are_skipped() {
    let rows = RowStore::from_entries(vec![
        SubjectEntry::new("Algebra", "4", GradeSymbol::B),
        SubjectEntry::new("Typo", "four", GradeSymbol::APlus),
        SubjectEntry::new("Negative", "-2", GradeSymbol::APlus),
        SubjectEntry::new("Blank", "", GradeSymbol::APlus),
    ]);
    let summary = compute_summary(rows.entries());
    assert_eq!(summary.total_credits, 4.0);
    assert_eq!(summary.cgpa, Some(7.0));
}

#[test]
fn test_shrinking_keeps_leading_rows() {
    let mut rows = filled_store();
    rows.set_desired_count("2").unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows.entries()[1].name, "Operating Systems");

    rows.set_desired_count("4").unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows.entries()[3].has_empty_credits());
    assert_eq!(rows.entries()[3].grade, GradeSymbol::APlus);
}

// ============================================================================
// Report generation
// ============================================================================

#[test]
fn test_report_lists_every_row_and_summary() {
    let rows = filled_store();
    let summary = compute_summary(rows.entries());
    let report = build_report(
        rows.entries(),
        summary,
        "Ravi Kumar",
        date(),
        "CGPA Calculator Report",
        "CGPA Calculator",
    )
    .unwrap();

    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.rows[2].subject, "Subject 3");
    assert_eq!(report.rows[2].points, 0.0);

    let texts = all_texts(&layout_report(&report));
    for expected in [
        "CGPA Calculator Report",
        "Student: Ravi Kumar",
        "Generated on: 15/01/2025",
        "Data Structures",
        "QUALIFIED",
        "CGPA: 8.57",
        "(Very Good)",
        "CGPA Calculator",
    ] {
        assert!(
            texts.iter().any(|t| t == expected),
            "missing {expected:?} in {texts:?}"
        );
    }
}

#[test]
fn test_export_writes_to_output_dir() {
    let rows = filled_store();
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("reports");
    let renderer = CapturingRenderer::default();

    let path = export_report(
        &renderer,
        &ExportRequest {
            entries: rows.entries(),
            student_name: "  Ravi Kumar ",
            date: date(),
            title: "CGPA Calculator Report",
            footer: "CGPA Calculator",
            output_dir: &output_dir,
        },
    )
    .unwrap();

    assert_eq!(path, output_dir.join("CGPA_Report_Ravi_Kumar_15-01-2025.pdf"));
    assert!(output_dir.is_dir());
    assert_eq!(renderer.documents.borrow().len(), 1);
}

#[test]
fn test_export_without_name_fails() {
    let rows = filled_store();
    let dir = tempfile::tempdir().unwrap();
    let renderer = CapturingRenderer::default();

    let result = export_report(
        &renderer,
        &ExportRequest {
            entries: rows.entries(),
            student_name: "   ",
            date: date(),
            title: "CGPA Calculator Report",
            footer: "CGPA Calculator",
            output_dir: dir.path(),
        },
    );

    assert!(matches!(result, Err(ExportError::MissingName)));
    assert!(renderer.documents.borrow().is_empty());
}

#[test]
fn test_pdf_export_produces_pdf_file() {
    let rows = filled_store();
    let dir = tempfile::tempdir().unwrap();

    let path = export_report(
        &PdfRenderer,
        &ExportRequest {
            entries: rows.entries(),
            student_name: "Ravi",
            date: date(),
            title: "CGPA Calculator Report",
            footer: "CGPA Calculator",
            output_dir: dir.path(),
        },
    )
    .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
