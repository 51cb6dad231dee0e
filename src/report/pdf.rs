//! PDF backend for laid-out reports, built on printpdf's builtin Helvetica.

use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect,
    Rgb as PdfRgb,
};

use super::layout::{DrawOp, FontWeight, LaidOutDocument, Rgb, TextAlign};
use super::{DocumentRenderer, ExportError};

/// Average Helvetica glyph advance as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.5;
const MM_PER_PT: f32 = 25.4 / 72.0;

pub struct PdfRenderer;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, document: &LaidOutDocument, path: &Path) -> Result<(), ExportError> {
        let width = Mm(document.width);
        let height = Mm(document.height);
        let (doc, first_page, first_layer) =
            PdfDocument::new(&document.title, width, height, "Layer 1");

        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| ExportError::Render(e.to_string()))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| ExportError::Render(e.to_string()))?,
        };

        for (index, page) in document.pages.iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_idx, layer_idx) =
                    doc.add_page(width, height, format!("Layer {}", index + 1));
                doc.get_page(page_idx).get_layer(layer_idx)
            };
            for op in &page.ops {
                draw(&layer, &fonts, document.height, op);
            }
            debug!("Rendered page {} ({} ops)", index + 1, page.ops.len());
        }

        let file = File::create(path).map_err(ExportError::Io)?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| ExportError::Render(e.to_string()))?;
        info!(
            "Wrote {} page(s) to {}",
            document.pages.len(),
            path.display()
        );
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    let Rgb(r, g, b) = rgb;
    Color::Rgb(PdfRgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

/// Layout uses a top-left origin; PDF user space starts bottom-left.
fn rect(page_height: f32, x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::new(
        Mm(x),
        Mm(page_height - (y + height)),
        Mm(x + width),
        Mm(page_height - y),
    )
}

fn text_width_mm(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_EM * MM_PER_PT
}

fn draw(layer: &PdfLayerReference, fonts: &Fonts, page_height: f32, op: &DrawOp) {
    match op {
        DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color: fill,
        } => {
            layer.set_fill_color(color(*fill));
            layer.add_rect(rect(page_height, *x, *y, *width, *height).with_mode(PaintMode::Fill));
        }
        DrawOp::StrokeRect {
            x,
            y,
            width,
            height,
            color: outline,
            line_width,
        } => {
            layer.set_outline_color(color(*outline));
            layer.set_outline_thickness(*line_width);
            layer.add_rect(rect(page_height, *x, *y, *width, *height).with_mode(PaintMode::Stroke));
        }
        DrawOp::Text {
            text,
            x,
            y,
            size,
            weight,
            color: fill,
            align,
        } => {
            let font = match weight {
                FontWeight::Normal => &fonts.regular,
                FontWeight::Bold => &fonts.bold,
            };
            let left = match align {
                TextAlign::Left => *x,
                TextAlign::Center => *x - text_width_mm(text, *size) / 2.0,
            };
            layer.set_fill_color(color(*fill));
            layer.use_text(text.as_str(), *size, Mm(left), Mm(page_height - *y), font);
        }
        DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color: outline,
            line_width,
        } => {
            layer.set_outline_color(color(*outline));
            layer.set_outline_thickness(*line_width);
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(*x1), Mm(page_height - *y1)), false),
                    (Point::new(Mm(*x2), Mm(page_height - *y2)), false),
                ],
                is_closed: false,
            });
        }
    }
}
