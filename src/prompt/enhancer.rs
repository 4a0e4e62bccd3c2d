use std::sync::Arc;
use tracing::{info, warn};
use crate::llm::LlmClient;
use super::templates;
use super::types::{clamp_score, round2, Analysis, EnhancedPrompt, ImprovementMetrics};

pub const EXPANSION_TECHNIQUE: &str = "Specification Expansion";
pub const BASIC_TECHNIQUE: &str = "Basic Enhancement";
pub const FALLBACK_SUFFIX: &str = ". Please provide more specific details and context.";

const CLARITY_BONUS: f64 = 0.4;
const CONTEXT_BONUS: f64 = 0.5;
const SPECIFICITY: f64 = 0.6;

pub struct PromptEnhancer {
    llm: Arc<dyn LlmClient>,
}

impl PromptEnhancer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Rewrite `original_prompt` so it covers the gaps listed in `analysis`.
    pub async fn enhance(&self, original_prompt: &str, analysis: &Analysis) -> EnhancedPrompt {
        let request = templates::enhancement_prompt(original_prompt, analysis);

        match self.llm.invoke(&request).await {
            Ok(response) => {
                info!("Enhanced prompt for {} task", analysis.task_type);
                EnhancedPrompt {
                    text: response.content.trim().to_string(),
                    technique: EXPANSION_TECHNIQUE.to_string(),
                    improvement_metrics: improvement_metrics(analysis),
                }
            }
            Err(e) => {
                warn!("Enhancement call failed: {}. Using basic enhancement.", e);
                basic_enhancement(original_prompt)
            }
        }
    }
}

pub fn improvement_metrics(analysis: &Analysis) -> ImprovementMetrics {
    ImprovementMetrics {
        clarity: round2(clamp_score(analysis.clarity_score + CLARITY_BONUS)),
        context: round2(clamp_score(analysis.context_score + CONTEXT_BONUS)),
        specificity: round2(SPECIFICITY),
    }
}

pub fn basic_enhancement(original_prompt: &str) -> EnhancedPrompt {
    EnhancedPrompt {
        text: format!("{}{}", original_prompt, FALLBACK_SUFFIX),
        technique: BASIC_TECHNIQUE.to_string(),
        improvement_metrics: ImprovementMetrics {
            clarity: 0.4,
            context: 0.5,
            specificity: SPECIFICITY,
        },
    }
}
