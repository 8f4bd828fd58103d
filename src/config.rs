use std::env;
use secrecy::SecretString;

pub const DEFAULT_GENERATION_API_BASE: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GENERATION_TIMEOUT_SECONDS: u64 = 120;

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: Option<SecretString>,
    pub generation_api_base: String,
    pub generation_model: String,
    pub generation_timeout_seconds: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            generation_api_base: env::var("GENERATION_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GENERATION_API_BASE.to_string()),
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| DEFAULT_GENERATION_MODEL.to_string()),
            generation_timeout_seconds: env::var("GENERATION_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_GENERATION_TIMEOUT_SECONDS),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    /// Logs configuration problems that make every generation request fail.
    /// The server still starts so history and health endpoints stay usable.
    pub fn warn_if_incomplete(&self) {
        if !self.has_credential() {
            log::warn!(
                "GEMINI_API_KEY is not set; flashcard generation requests will fail with MISSING_CREDENTIAL"
            );
        }
        if self.generation_timeout_seconds == 0 {
            log::warn!("GENERATION_TIMEOUT_SECONDS is 0; every generation request will time out");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: Some(SecretString::from("test_api_key".to_string())),
            generation_api_base: "http://127.0.0.1:9".to_string(),
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
            generation_timeout_seconds: 5,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.generation_api_base.is_empty());
        assert!(!config.generation_model.is_empty());
        assert!(!config.web_server_host.is_empty());
        if let Some(key) = &config.gemini_api_key {
            assert!(!key.expose_secret().trim().is_empty());
        }
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert!(config.has_credential());
        assert_eq!(config.generation_model, "gemini-2.5-flash");
        assert_eq!(config.generation_timeout_seconds, 5);
    }

    #[test]
    fn test_config_without_key_has_no_credential() {
        let config = Config {
            gemini_api_key: None,
            ..Config::test_config()
        };

        assert!(!config.has_credential());
    }
}
