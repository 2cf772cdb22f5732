use std::env;
use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub mistral_api_key: SecretString,
    pub mistral_api_base: String,
    pub mistral_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub fetch_timeout_secs: u64,
    pub llm_timeout_secs: u64,
    pub pdf_font_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            // Deliberately not validated here: a missing key surfaces as the
            // provider's own auth error on the first generation call.
            mistral_api_key: SecretString::from(
                env::var("MISTRAL_API_KEY").unwrap_or_default(),
            ),
            mistral_api_base: env::var("MISTRAL_API_BASE")
                .unwrap_or_else(|_| "https://api.mistral.ai/v1".to_string()),
            mistral_model: env::var("MISTRAL_MODEL")
                .unwrap_or_else(|_| "mistral-large-latest".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            llm_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            pdf_font_path: env::var("PDF_FONT_PATH")
                .unwrap_or_else(|_| "fonts/DejaVuSans.ttf".to_string()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mistral_api_key: SecretString::from("test_api_key".to_string()),
            mistral_api_base: "https://api.mistral.ai/v1".to_string(),
            mistral_model: "mistral-large-latest".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            fetch_timeout_secs: 10,
            llm_timeout_secs: 5,
            pdf_font_path: "fonts/DejaVuSans.ttf".to_string(),
        }
    }
}
