use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
};

/// Renders a quiz to a .docx binary: centered heading title, bold
/// question paragraphs, indented numbered options, a blank paragraph
/// between question blocks.
pub fn render(quiz: &Quiz) -> AppResult<Vec<u8>> {
    let heading = Style::new("Heading1", StyleType::Paragraph)
        .name("Heading 1")
        .size(32)
        .bold();

    let mut docx = Docx::new()
        .add_style(heading)
        .default_fonts(RunFonts::new().ascii("Arial"))
        .default_size(24)
        .add_paragraph(
            Paragraph::new()
                .style("Heading1")
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(quiz.name.as_str())),
        )
        .add_paragraph(Paragraph::new());

    for (i, question) in quiz.questions.iter().enumerate() {
        docx = docx.add_paragraph(
            Paragraph::new().add_run(
                Run::new()
                    .add_text(format!("{}. {}", i + 1, question.question))
                    .bold(),
            ),
        );

        for (j, option) in question.options.iter().enumerate() {
            docx = docx.add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(format!("   {}. {}", j + 1, option.answer))),
            );
        }

        docx = docx.add_paragraph(Paragraph::new());
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).map_err(|e| {
        log::error!("Word rendering failed: {}", e);
        AppError::Render(format!("failed to serialize document: {}", e))
    })?;

    Ok(buffer.into_inner())
}
