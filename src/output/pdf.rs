//! PDF rendering of the final report

use crate::error::{GrowthIntelError, Result};
use crate::output::report::{Report, REPORT_TITLE};
use log::info;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use std::fs;
use std::path::{Path, PathBuf};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 25.0;
const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 11.0;
const LINE_GAP_MM: f32 = 7.0;
const SPACER_MM: f32 = 7.6;

#[derive(Debug, Clone, PartialEq)]
pub enum PdfLine {
    Title(String),
    Text(String),
    Spacer,
}

/// A4 single page report with built-in Helvetica fonts.
pub struct PdfRenderer;

impl PdfRenderer {
    /// Title, spacer, user and date lines, spacer, then one line per metric.
    pub fn document_lines(report: &Report) -> Vec<PdfLine> {
        let mut lines = vec![
            PdfLine::Title(REPORT_TITLE.to_string()),
            PdfLine::Spacer,
            PdfLine::Text(report.user_line()),
            PdfLine::Text(report.date_line()),
            PdfLine::Spacer,
        ];
        lines.extend(report.metric_lines().into_iter().map(PdfLine::Text));
        lines
    }

    pub fn render(report: &Report) -> Result<Vec<u8>> {
        if report.user_id.trim().is_empty() {
            return Err(GrowthIntelError::MissingUserId);
        }

        let (doc, page, layer) = PdfDocument::new(
            REPORT_TITLE,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let layer = doc.get_page(page).get_layer(layer);

        let title_font = Self::font(&doc, BuiltinFont::HelveticaBold)?;
        let body_font = Self::font(&doc, BuiltinFont::Helvetica)?;

        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
        for line in Self::document_lines(report) {
            match line {
                PdfLine::Title(text) => {
                    layer.use_text(text, TITLE_SIZE, Mm(MARGIN_MM), Mm(y), &title_font);
                    y -= LINE_GAP_MM * 1.5;
                }
                PdfLine::Text(text) => {
                    layer.use_text(text, BODY_SIZE, Mm(MARGIN_MM), Mm(y), &body_font);
                    y -= LINE_GAP_MM;
                }
                PdfLine::Spacer => y -= SPACER_MM,
            }
        }

        doc.save_to_bytes()
            .map_err(|e| GrowthIntelError::PdfRendering(format!("Failed to serialize PDF: {}", e)))
    }

    fn font(doc: &printpdf::PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef> {
        doc.add_builtin_font(font)
            .map_err(|e| GrowthIntelError::PdfRendering(format!("Failed to load font: {}", e)))
    }
}

/// Render the report into `dir`, read the file back and return its path.
pub fn write_report_pdf(report: &Report, dir: &Path) -> Result<PathBuf> {
    if report.user_id.contains(['/', '\\']) {
        return Err(GrowthIntelError::InvalidInput(format!(
            "User ID '{}' cannot be used as a file name",
            report.user_id
        )));
    }

    let bytes = PdfRenderer::render(report)?;

    fs::create_dir_all(dir)?;
    let path = dir.join(report.file_name());
    fs::write(&path, &bytes)?;

    let written = fs::read(&path)?;
    if written != bytes {
        return Err(GrowthIntelError::PdfRendering(format!(
            "Report file {} does not match the rendered document",
            path.display()
        )));
    }

    info!("Wrote report {} ({} bytes)", path.display(), written.len());
    Ok(path)
}
