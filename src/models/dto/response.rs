use serde::Serialize;

/// Body of a successful GET /api/fetch-text response.
#[derive(Debug, Serialize)]
pub struct ExtractedText {
    pub text: String,
}
