use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    pub model_type: String,
    pub api_url: String,
    pub api_key: Option<String>,
    pub temperature: f64,
    pub timeout_secs: u64,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            model_type: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            temperature: 0.4,
            timeout_secs: 120,
        }
    }
}

impl LLMConfig {
    pub fn new(api_url: String, api_key: Option<String>, model_type: String) -> Self {
        Self {
            api_url,
            api_key,
            model_type,
            ..Self::default()
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Endpoint for chat completions, tolerating a trailing slash on the base URL.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_url.trim_end_matches('/'))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.trim().is_empty() {
            return Err("LLM API URL must not be empty".to_string());
        }
        if self.model_type.trim().is_empty() {
            return Err("LLM model must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!("temperature {} is outside 0.0..=2.0", self.temperature));
        }
        if self.timeout_secs == 0 {
            return Err("LLM request timeout must be at least one second".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_gemini() {
        let config = LLMConfig::default();
        assert_eq!(config.model_type, "gemini-1.5-pro");
        assert_eq!(config.temperature, 0.4);
        assert!(config.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn completions_url_strips_trailing_slash() {
        let config = LLMConfig::new(
            "http://localhost:1234/v1/".to_string(),
            None,
            "local".to_string(),
        );
        assert_eq!(config.completions_url(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn timeout_is_configurable_but_not_zero() {
        let config = LLMConfig::default().with_timeout_secs(30);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate().is_ok());
        assert!(LLMConfig::default().with_timeout_secs(0).validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let config = LLMConfig::default().with_temperature(3.5);
        assert!(config.validate().is_err());
    }
}
