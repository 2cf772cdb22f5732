use serde::Deserialize;

/// Body of POST /api/generate-test.
#[derive(Debug, Clone, Deserialize)]
pub struct TextInput {
    pub text: String,
}

/// Query parameters of GET /api/fetch-text.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchTextQuery {
    pub url: String,
}
