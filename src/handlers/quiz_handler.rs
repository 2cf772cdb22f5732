use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::FetchTextQuery, request::TextInput, response::ExtractedText},
    services::{
        normalizer::{normalize_quiz, MissingQuestions},
        prompt,
    },
};

#[post("/api/generate-test")]
async fn generate_test(
    state: web::Data<AppState>,
    body: web::Json<TextInput>,
) -> Result<HttpResponse, AppError> {
    let messages = prompt::build_messages(&body.text);
    let raw = state.generator.generate(&messages).await?;
    let quiz = normalize_quiz(raw, MissingQuestions::Reject)?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[get("/api/fetch-text")]
async fn fetch_text(
    state: web::Data<AppState>,
    query: web::Query<FetchTextQuery>,
) -> Result<HttpResponse, AppError> {
    let text = state.extractor.extract_from_url(&query.url).await?;
    Ok(HttpResponse::Ok().json(ExtractedText { text }))
}
