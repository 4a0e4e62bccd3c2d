pub mod client;
pub mod config;

use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

pub use client::ChatCompletionsClient;
pub use config::LLMConfig;

/// Text returned by a single LLM invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    pub content: String,
}

impl LlmResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out")]
    Timeout,
    #[error("LLM API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

pub type LlmFuture<'a> = Pin<Box<dyn Future<Output = Result<LlmResponse, LlmError>> + Send + 'a>>;

/// Capability the analyzer and the enhancer call out through.
///
/// Object safe so components can hold an `Arc<dyn LlmClient>` and tests can
/// substitute scripted replies or failures.
pub trait LlmClient: Send + Sync {
    /// Send an already filled template and return the model's reply.
    fn invoke<'a>(&'a self, prompt: &'a str) -> LlmFuture<'a>;

    fn model_name(&self) -> &str;
}
