use std::sync::Arc;
use tracing::info;
use crate::llm::LlmClient;
use super::analyzer::PromptAnalyzer;
use super::enhancer::PromptEnhancer;
use super::selector;
use super::types::{Analysis, EnhancedPrompt, ModelRecommendation, PromptReport};

/// Analyzer, selector and enhancer wired to one LLM client.
///
/// Holds no per-request state, so a single instance can be shared behind an
/// `Arc` by concurrent requests.
pub struct PromptPipeline {
    analyzer: PromptAnalyzer,
    enhancer: PromptEnhancer,
}

impl PromptPipeline {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            analyzer: PromptAnalyzer::new(Arc::clone(&llm)),
            enhancer: PromptEnhancer::new(llm),
        }
    }

    pub async fn analyze(&self, prompt: &str) -> Analysis {
        self.analyzer.analyze(prompt).await
    }

    pub fn select(&self, analysis: &Analysis) -> ModelRecommendation {
        selector::select(analysis)
    }

    pub async fn enhance(&self, prompt: &str, analysis: &Analysis) -> EnhancedPrompt {
        self.enhancer.enhance(prompt, analysis).await
    }

    /// Analyze once, then recommend a model and enhance from that analysis.
    pub async fn process(&self, prompt: &str) -> PromptReport {
        let analysis = self.analyze(prompt).await;
        let recommended_llm = self.select(&analysis);
        let enhanced_prompt = self.enhance(prompt, &analysis).await;

        info!(
            "Processed prompt: {} / {} -> {}",
            analysis.task_type, analysis.complexity, recommended_llm.model
        );

        PromptReport {
            analysis,
            recommended_llm,
            enhanced_prompt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{LlmError, LlmFuture, LlmResponse};
    use crate::prompt::selector::candidates;
    use crate::prompt::types::{Complexity, TaskType};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replies from a script in call order, failing once it runs out.
    struct ScriptedClient {
        replies: Vec<&'static str>,
        calls: AtomicUsize,
    }

    impl LlmClient for ScriptedClient {
        fn invoke<'a>(&'a self, _prompt: &'a str) -> LlmFuture<'a> {
            let idx = self.calls.fetch_add(1, Ordering::SeqCst);
            let reply = self
                .replies
                .get(idx)
                .map(|text| LlmResponse::new(*text))
                .ok_or_else(|| LlmError::Network("script exhausted".to_string()));
            Box::pin(async move { reply })
        }

        fn model_name(&self) -> &str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn process_runs_every_stage_with_two_calls() {
        let client = Arc::new(ScriptedClient {
            replies: vec![
                r#"{"task_type": "code", "complexity": "Low", "missing_elements": ["language"], "context_score": 0.2, "clarity_score": 0.7}"#,
                "Write a merge sort in Python for a list of integers.",
            ],
            calls: AtomicUsize::new(0),
        });
        let pipeline = PromptPipeline::new(client.clone());

        let report = pipeline.process("Write a sorting algorithm in Python.").await;

        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
        assert_eq!(report.analysis.task_type, TaskType::Code);
        assert_eq!(report.analysis.complexity, Complexity::Low);
        assert!(candidates(TaskType::Code, Complexity::Low).contains(&report.recommended_llm.model.as_str()));
        assert_eq!(report.enhanced_prompt.technique, "Specification Expansion");
        assert_eq!(report.enhanced_prompt.improvement_metrics.clarity, 1.0);
        assert_eq!(report.enhanced_prompt.improvement_metrics.context, 0.7);
    }

    #[tokio::test]
    async fn process_survives_a_dead_provider() {
        let client = Arc::new(ScriptedClient {
            replies: Vec::new(),
            calls: AtomicUsize::new(0),
        });
        let pipeline = PromptPipeline::new(client);

        let report = pipeline.process("hello there").await;

        assert_eq!(report.analysis.task_type, TaskType::General);
        assert_eq!(report.recommended_llm.model, "claude-opus");
        assert_eq!(report.enhanced_prompt.technique, "Basic Enhancement");
    }
}
