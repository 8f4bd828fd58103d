use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Sends one prompt to the text-generation service and hands back its reply
/// text untouched. Implementations issue exactly one request per call and
/// never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn invoke(&self, prompt: &str, credential: &SecretString) -> AppResult<String>;
}

/// OpenAI-compatible chat-completions client. The default base URL is
/// Gemini's OpenAI-compatible endpoint.
pub struct ModelService {
    api_base: String,
    model: String,
    timeout: Duration,
    http: reqwest::Client,
    backoff: ExponentialBackoff,
}

impl ModelService {
    pub fn new(api_base: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_base: api_base.into(),
            model: model.into(),
            timeout,
            http: reqwest::Client::new(),
            backoff: no_retry_backoff(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.generation_api_base.clone(),
            config.generation_model.clone(),
            Duration::from_secs(config.generation_timeout_seconds),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ]
        })
    }
}

#[async_trait]
impl GenerationClient for ModelService {
    async fn invoke(&self, prompt: &str, credential: &SecretString) -> AppResult<String> {
        let key = credential.expose_secret();
        if key.trim().is_empty() {
            return Err(AppError::MissingCredential);
        }

        // Shares the connection pool; the key is per call.
        let client = Client::build(
            self.http.clone(),
            OpenAIConfig::new()
                .with_api_base(self.api_base.clone())
                .with_api_key(key.to_string()),
            self.backoff.clone(),
        );

        log::debug!(
            "Sending generation request to {} (model {}, prompt {} chars)",
            self.api_base,
            self.model,
            prompt.chars().count()
        );

        let chat = client.chat();
        let call = chat.create_byot(self.request_body(prompt));
        let response: Value = match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                log::warn!("Generation request failed: {}", e);
                return Err(AppError::ServiceUnavailable(e.to_string()));
            }
            Err(_) => {
                log::warn!("Generation request timed out after {:?}", self.timeout);
                return Err(AppError::ServiceUnavailable(format!(
                    "request timed out after {} seconds",
                    self.timeout.as_secs()
                )));
            }
        };

        Ok(reply_text(&response))
    }
}

/// The client retries rate-limited and 5xx replies by default. A zero
/// elapsed-time budget turns the first failure into the final one.
fn no_retry_backoff() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

/// Text of the first choice, or an empty string when the service sent none.
fn reply_text(response: &Value) -> String {
    match response["choices"][0]["message"]["content"].as_str() {
        Some(content) => content.to_string(),
        None => {
            log::warn!("Generation reply carried no message content");
            String::new()
        }
    }
}
