//! Prompt analysis, model recommendation and prompt enhancement on top of an
//! OpenAI-compatible chat completions API.
//!
//! ```text
//! prompt -> PromptAnalyzer -> Analysis -> selector::select  -> ModelRecommendation
//!                                      -> PromptEnhancer    -> EnhancedPrompt
//! ```

pub mod llm;
pub mod prompt;
pub mod server;

pub use llm::{ChatCompletionsClient, LLMConfig, LlmClient, LlmError, LlmResponse};
pub use prompt::{
    Analysis, Complexity, EnhancedPrompt, ModelRecommendation, PromptPipeline, PromptReport,
    TaskType,
};
