//! # Report Layout
//!
//! Lays a [`Report`] out on A4 pages as plain drawing primitives. The
//! renderer only has to paint what it is given.
//!
//! Coordinates are millimetres from the top-left corner of the page; text
//! `y` is the baseline.
//!
//! ```text
//! 0   ┌──────────────────────────────┐
//!     │ header band (title/name/date)│
//! 50  ├──────────────────────────────┤
//! 70  │ ┌ Subject  Credits Grade Pts ┐│
//! 95  │ │ row, row, row ...          ││  12mm per row, new page past 250
//!     │ └────────────────────────────┘│
//!     │ ┌ Summary ───── CGPA ───────┐ │  20mm below the last row
//!     │ └───────────────────────────┘ │
//! 280 │           footer              │
//! 297 └──────────────────────────────┘
//! ```

use super::assembly::Report;
use crate::core::summary::CgpaTier;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

const HEADER_HEIGHT: f32 = 50.0;
const TABLE_X: f32 = 20.0;
const TABLE_WIDTH: f32 = 170.0;
const TABLE_HEADER_Y: f32 = 70.0;
const TABLE_HEADER_HEIGHT: f32 = 15.0;
const FIRST_ROW_Y: f32 = 95.0;
const ROW_HEIGHT: f32 = 12.0;
const PAGE_BREAK_Y: f32 = 250.0;
const CONTINUATION_Y: f32 = 30.0;
const SUMMARY_GAP: f32 = 20.0;
const SUMMARY_HEIGHT: f32 = 40.0;
const FOOTER_Y: f32 = 280.0;

const ACCENT: Rgb = Rgb(102, 126, 234);
const WHITE: Rgb = Rgb(255, 255, 255);
const BLACK: Rgb = Rgb(0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
        line_width: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        weight: FontWeight,
        color: Rgb,
        align: TextAlign,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Rgb,
        line_width: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    fn fill(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn stroke(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb, line_width: f32) {
        self.ops.push(DrawOp::StrokeRect {
            x,
            y,
            width,
            height,
            color,
            line_width,
        });
    }

    fn text(&mut self, style: TextStyle, x: f32, y: f32, text: impl Into<String>) {
        self.ops.push(DrawOp::Text {
            text: text.into(),
            x,
            y,
            size: style.size,
            weight: style.weight,
            color: style.color,
            align: style.align,
        });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb) {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            line_width: 0.5,
        });
    }

    /// All text runs on the page, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct TextStyle {
    size: f32,
    weight: FontWeight,
    color: Rgb,
    align: TextAlign,
}

impl TextStyle {
    fn new(size: f32, weight: FontWeight, color: Rgb) -> Self {
        Self {
            size,
            weight,
            color,
            align: TextAlign::Left,
        }
    }

    fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub pages: Vec<Page>,
}

/// Colour the CGPA is printed in.
pub fn tier_color(tier: CgpaTier) -> Rgb {
    match tier {
        CgpaTier::High => Rgb(0, 150, 0),
        CgpaTier::Good => Rgb(0, 100, 200),
        CgpaTier::Fair => Rgb(200, 100, 0),
        CgpaTier::Low => Rgb(200, 0, 0),
    }
}

pub fn layout_report(report: &Report) -> LaidOutDocument {
    let mut pages = Vec::new();
    let mut page = Page::default();

    page.fill(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT, WHITE);
    draw_header(&mut page, report);
    draw_table_header(&mut page);

    let cell = TextStyle::new(11.0, FontWeight::Normal, BLACK);
    let mut y = FIRST_ROW_Y;
    for (i, row) in report.rows.iter().enumerate() {
        if i % 2 == 0 {
            page.fill(TABLE_X, y - 8.0, TABLE_WIDTH, ROW_HEIGHT, Rgb(250, 250, 250));
        }
        page.text(cell, 25.0, y, row.subject.clone());
        page.text(cell.centered(), 95.0, y, row.credits.to_string());
        page.text(cell.centered(), 125.0, y, row.grade.label());
        page.text(cell.centered(), 155.0, y, format!("{:.1}", row.points));
        page.line(TABLE_X, y + 3.0, TABLE_X + TABLE_WIDTH, y + 3.0, Rgb(230, 230, 230));

        y += ROW_HEIGHT;
        if y > PAGE_BREAK_Y {
            pages.push(std::mem::take(&mut page));
            y = CONTINUATION_Y;
        }
    }

    // The summary box must clear the footer
    y += SUMMARY_GAP;
    if y + SUMMARY_HEIGHT > FOOTER_Y - 5.0 {
        pages.push(std::mem::take(&mut page));
        y = CONTINUATION_Y;
    }
    draw_summary(&mut page, report, y);

    page.text(
        TextStyle::new(9.0, FontWeight::Normal, Rgb(120, 120, 120)).centered(),
        PAGE_WIDTH / 2.0,
        FOOTER_Y,
        report.footer.clone(),
    );
    pages.push(page);

    LaidOutDocument {
        title: report.title.clone(),
        width: PAGE_WIDTH,
        height: PAGE_HEIGHT,
        pages,
    }
}

fn draw_header(page: &mut Page, report: &Report) {
    let center = PAGE_WIDTH / 2.0;
    page.fill(0.0, 0.0, PAGE_WIDTH, HEADER_HEIGHT, ACCENT);
    page.text(
        TextStyle::new(22.0, FontWeight::Bold, WHITE).centered(),
        center,
        20.0,
        report.title.clone(),
    );
    page.text(
        TextStyle::new(16.0, FontWeight::Bold, WHITE).centered(),
        center,
        32.0,
        format!("Student: {}", report.student_name),
    );
    page.text(
        TextStyle::new(11.0, FontWeight::Normal, WHITE).centered(),
        center,
        42.0,
        format!("Generated on: {}", report.date_label()),
    );
}

fn draw_table_header(page: &mut Page) {
    page.fill(TABLE_X, TABLE_HEADER_Y, TABLE_WIDTH, TABLE_HEADER_HEIGHT, Rgb(240, 240, 240));
    let heading = TextStyle::new(12.0, FontWeight::Bold, BLACK);
    let baseline = TABLE_HEADER_Y + 10.0;
    for (x, label) in [(25.0, "Subject"), (90.0, "Credits"), (120.0, "Grade"), (150.0, "Points")] {
        page.text(heading, x, baseline, label);
    }
    page.stroke(
        TABLE_X,
        TABLE_HEADER_Y,
        TABLE_WIDTH,
        TABLE_HEADER_HEIGHT,
        Rgb(200, 200, 200),
        0.5,
    );
}

fn draw_summary(page: &mut Page, report: &Report, y: f32) {
    let summary = &report.summary;
    page.fill(TABLE_X, y, TABLE_WIDTH, SUMMARY_HEIGHT, Rgb(245, 245, 245));
    page.stroke(TABLE_X, y, TABLE_WIDTH, SUMMARY_HEIGHT, ACCENT, 1.0);

    page.text(TextStyle::new(14.0, FontWeight::Bold, BLACK), 25.0, y + 12.0, "Summary");
    let body = TextStyle::new(12.0, FontWeight::Normal, BLACK);
    page.text(body, 25.0, y + 22.0, format!("Total Credits: {}", summary.total_credits));
    page.text(body, 25.0, y + 32.0, format!("Total Points: {:.1}", summary.total_points));

    page.text(
        TextStyle::new(16.0, FontWeight::Bold, tier_color(summary.tier())),
        120.0,
        y + 22.0,
        format!("CGPA: {}", summary.cgpa_label()),
    );
    page.text(
        TextStyle::new(11.0, FontWeight::Normal, Rgb(100, 100, 100)),
        120.0,
        y + 32.0,
        format!("({})", report.performance_label()),
    );
}
