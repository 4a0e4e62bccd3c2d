use std::sync::Arc;
use tracing::{debug, info, warn};
use crate::llm::LlmClient;
use super::parser;
use super::templates;
use super::types::Analysis;

pub struct PromptAnalyzer {
    llm: Arc<dyn LlmClient>,
}

impl PromptAnalyzer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Ask the LLM to classify `prompt` and scrape the reply.
    ///
    /// Never fails: an LLM error yields the keyword-based fallback analysis with
    /// the error text recorded in `missing_elements`.
    pub async fn analyze(&self, prompt: &str) -> Analysis {
        let request = templates::analysis_prompt(prompt);
        info!("Analyzing prompt with {}", self.llm.model_name());

        match self.llm.invoke(&request).await {
            Ok(response) => {
                debug!("Raw analysis response: {}", response.content);
                parser::parse(&response.content, prompt)
            }
            Err(e) => {
                warn!("Analysis call failed: {}. Using heuristic analysis.", e);
                parser::fallback(prompt, &e.to_string())
            }
        }
    }
}
