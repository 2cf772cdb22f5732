use std::path::Path;

use printpdf::{Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
};

// US Letter, 612 x 792 pt.
const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;

const TITLE_Y: f32 = 750.0;
const BODY_START_Y: f32 = 700.0;
const BOTTOM_MARGIN: f32 = 50.0;
const QUESTION_X: f32 = 100.0;
const OPTION_X: f32 = 120.0;
const QUESTION_STEP: f32 = 20.0;
const OPTION_STEP: f32 = 15.0;
const BLOCK_GAP: f32 = 10.0;

// Mm is an f32 newtype; coordinates are kept in points and converted here.
fn pt(value: f32) -> Mm {
    Mm(value * 25.4 / 72.0)
}

/// Renders quizzes to PDF with a font loaded once at startup. The font
/// must cover the scripts of the quiz text (the bundled default is
/// DejaVu Sans, which covers Cyrillic).
pub struct PdfRenderer {
    font_data: Vec<u8>,
}

impl PdfRenderer {
    /// Loads and sanity-checks the font file. Called at startup so a
    /// missing or unparsable font kills the process, not a request.
    pub fn from_font_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let font_data = std::fs::read(path).map_err(|e| {
            AppError::Render(format!("failed to read font {}: {}", path.display(), e))
        })?;

        let (probe, _, _) = PdfDocument::new("font probe", pt(PAGE_WIDTH), pt(PAGE_HEIGHT), "probe");
        probe.add_external_font(font_data.as_slice()).map_err(|e| {
            AppError::Render(format!("failed to parse font {}: {}", path.display(), e))
        })?;

        Ok(Self { font_data })
    }

    /// Wraps already-loaded font bytes without the startup probe. The
    /// bytes are still parsed on every render.
    pub fn from_font_bytes(font_data: Vec<u8>) -> Self {
        Self { font_data }
    }

    pub fn render(&self, quiz: &Quiz) -> AppResult<Vec<u8>> {
        let (doc, page, layer) =
            PdfDocument::new(&quiz.name, pt(PAGE_WIDTH), pt(PAGE_HEIGHT), "Layer 1");
        let font = doc
            .add_external_font(self.font_data.as_slice())
            .map_err(|e| render_error(format!("failed to embed font: {}", e)))?;

        let mut layer_ref = doc.get_page(page).get_layer(layer);
        layer_ref.use_text(quiz.name.clone(), 16.0, pt(QUESTION_X), pt(TITLE_Y), &font);

        let mut y = BODY_START_Y;
        for (i, question) in quiz.questions.iter().enumerate() {
            layer_ref.use_text(
                format!("{}. {}", i + 1, question.question),
                12.0,
                pt(QUESTION_X),
                pt(y),
                &font,
            );
            y -= QUESTION_STEP;

            for (j, option) in question.options.iter().enumerate() {
                layer_ref.use_text(
                    format!("{}. {}", j + 1, option.answer),
                    12.0,
                    pt(OPTION_X),
                    pt(y),
                    &font,
                );
                y -= OPTION_STEP;
            }

            y -= BLOCK_GAP;

            if y < BOTTOM_MARGIN {
                layer_ref = new_page(&doc);
                y = TITLE_Y;
            }
        }

        doc.save_to_bytes()
            .map_err(|e| render_error(format!("failed to serialize PDF: {}", e)))
    }
}

fn new_page(doc: &PdfDocumentReference) -> PdfLayerReference {
    let (page, layer) = doc.add_page(pt(PAGE_WIDTH), pt(PAGE_HEIGHT), "Layer 1");
    doc.get_page(page).get_layer(layer)
}

fn render_error(message: String) -> AppError {
    log::error!("PDF rendering failed: {}", message);
    AppError::Render(message)
}
