use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    render,
    services::normalizer::{normalize_quiz, MissingQuestions},
};

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[post("/api/generate-pdf")]
async fn generate_pdf(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
    // Client-supplied quizzes go through the same normalizer as LLM
    // output, with missing questions treated as an empty quiz.
    let quiz = normalize_quiz(body.into_inner(), MissingQuestions::DefaultEmpty)?;
    let bytes = state.pdf_renderer.render(&quiz)?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(("Content-Disposition", "attachment; filename=test.pdf"))
        .body(bytes))
}

#[post("/api/generate-word")]
async fn generate_word(
    _state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
    let quiz = normalize_quiz(body.into_inner(), MissingQuestions::DefaultEmpty)?;
    let bytes = render::docx::render(&quiz)?;

    Ok(HttpResponse::Ok()
        .content_type(DOCX_MIME)
        .insert_header(("Content-Disposition", "attachment; filename=test.docx"))
        .body(bytes))
}
