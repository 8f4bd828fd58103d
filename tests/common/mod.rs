//! Shared doubles for integration tests: a canned generation client and a
//! config that never touches the network.

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use secrecy::SecretString;

use flashcard_server::{
    config::Config,
    errors::{AppError, AppResult},
    services::GenerationClient,
};

/// Replies with a fixed result and records every prompt it was sent.
pub struct StubGenerationClient {
    reply: AppResult<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerationClient {
    pub fn replying(reply: &str) -> Self {
        Self::with_result(Ok(reply.to_string()))
    }

    pub fn failing(err: AppError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(reply: AppResult<String>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerationClient for StubGenerationClient {
    async fn invoke(&self, prompt: &str, _credential: &SecretString) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}

pub fn test_config(api_key: Option<&str>) -> Config {
    Config {
        gemini_api_key: api_key.map(|k| SecretString::from(k.to_string())),
        generation_api_base: "http://127.0.0.1:9".to_string(),
        generation_model: "gemini-2.5-flash".to_string(),
        generation_timeout_seconds: 5,
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
    }
}

pub const FENCED_REPLY: &str = "```json\n{\"flashcards\":[{\"question\":\"What is 2+2?\",\"short_answer\":\"4\",\"long_answer\":\"Two plus two equals four.\"}]}\n```";

pub const THREE_CARD_REPLY: &str = r#"Here you go!
{"flashcards":[
  {"question":"Q1","short_answer":"A1","long_answer":"L1"},
  {"question":"Q2","short_answer":"A2","long_answer":"L2"},
  {"question":"Q3","short_answer":"A3","long_answer":"L3"}
]}"#;
