use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::prompt::PromptMessages,
};

/// Seam between the request pipeline and the LLM provider. Mocked in
/// tests so handlers can be exercised without network access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    /// Sends the message pair and returns the provider's JSON payload,
    /// parsed but not yet validated.
    async fn generate(&self, prompt: &PromptMessages) -> AppResult<Value>;
}

/// Production generator talking to an OpenAI-compatible
/// chat-completions endpoint in JSON mode.
pub struct MistralGenerator {
    client: reqwest::Client,
    api_key: SecretString,
    api_base: String,
    model: String,
}

impl MistralGenerator {
    pub fn new(config: &Config) -> AppResult<Self> {
        // Explicit timeout on the generation call; expiry surfaces as a
        // Generation error like any other provider failure.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout_secs))
            .build()
            .map_err(|e| AppError::Generation(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.mistral_api_key.clone(),
            api_base: config.mistral_api_base.clone(),
            model: config.mistral_model.clone(),
        })
    }
}

#[async_trait]
impl QuizGenerator for MistralGenerator {
    async fn generate(&self, prompt: &PromptMessages) -> AppResult<Value> {
        let payload = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": prompt.system},
                {"role": "user", "content": prompt.user}
            ],
            "response_format": {"type": "json_object"},
            "stream": false,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(|e| generation_error(format!("provider request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(generation_error(format!(
                "provider returned {}: {}",
                status.as_u16(),
                body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| generation_error(format!("failed to decode provider response: {}", e)))?;

        let content = body
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or_else(|| generation_error("provider response has no message content".into()))?;

        serde_json::from_str(content)
            .map_err(|e| generation_error(format!("provider returned invalid JSON: {}", e)))
    }
}

fn generation_error(message: String) -> AppError {
    log::error!("quiz generation failed: {}", message);
    AppError::Generation(message)
}
