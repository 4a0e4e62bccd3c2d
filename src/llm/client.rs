use std::time::Duration;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, error};
use super::config::LLMConfig;
use super::{LlmClient, LlmError, LlmFuture, LlmResponse};

/// Client for any OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct ChatCompletionsClient {
    client: Client,
    config: LLMConfig,
}

impl ChatCompletionsClient {
    pub fn new(config: LLMConfig) -> Result<Self, LlmError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|e| LlmError::InvalidResponse(format!("Invalid API key format: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Network(format!("Failed to create client: {}", e)))?;

        Ok(Self { client, config })
    }

    async fn complete(&self, prompt: &str) -> Result<LlmResponse, LlmError> {
        let request_body = build_request_body(&self.config, prompt);

        let response = self
            .client
            .post(self.config.completions_url())
            .json(&request_body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let response_json: Value = response.json().await.map_err(map_transport_error)?;
        let content = extract_content(&response_json)?;
        debug!("LLM replied with {} characters", content.len());

        Ok(LlmResponse::new(content))
    }
}

impl LlmClient for ChatCompletionsClient {
    fn invoke<'a>(&'a self, prompt: &'a str) -> LlmFuture<'a> {
        Box::pin(self.complete(prompt))
    }

    fn model_name(&self) -> &str {
        &self.config.model_type
    }
}

fn build_request_body(config: &LLMConfig, prompt: &str) -> Value {
    json!({
        "model": config.model_type,
        "messages": [
            {
                "role": "user",
                "content": prompt
            }
        ],
        "temperature": config.temperature
    })
}

fn extract_content(response_json: &Value) -> Result<String, LlmError> {
    response_json["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            let response_str = serde_json::to_string_pretty(response_json)
                .unwrap_or_else(|_| "Failed to format response".to_string());
            error!("Invalid response format. Full response: {}", response_str);
            LlmError::InvalidResponse("missing content field".to_string())
        })
}

fn map_transport_error(e: reqwest::Error) -> LlmError {
    if e.is_timeout() {
        LlmError::Timeout
    } else if e.is_decode() {
        LlmError::InvalidResponse(e.to_string())
    } else {
        LlmError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_configured_model_and_temperature() {
        let config = LLMConfig::default();
        let body = build_request_body(&config, "Prompt: hi");

        assert_eq!(body["model"], "gemini-1.5-pro");
        assert_eq!(body["temperature"], 0.4);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Prompt: hi");
    }

    #[test]
    fn extracts_first_choice_content() {
        let response = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "{\"task_type\": \"code\"}" } }
            ]
        });
        assert_eq!(extract_content(&response).unwrap(), "{\"task_type\": \"code\"}");
    }

    #[test]
    fn missing_content_is_invalid_response() {
        let response = json!({ "error": { "message": "blocked" } });
        assert!(matches!(
            extract_content(&response),
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[test]
    fn client_reports_configured_model() {
        let config = LLMConfig::new(
            "http://localhost:1234/v1".to_string(),
            Some("secret".to_string()),
            "local-model".to_string(),
        );
        let client = ChatCompletionsClient::new(config).unwrap();
        assert_eq!(client.model_name(), "local-model");
    }
}
