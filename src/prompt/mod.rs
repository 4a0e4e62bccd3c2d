pub mod analyzer;
pub mod enhancer;
pub mod heuristics;
pub mod parser;
pub mod pipeline;
pub mod selector;
pub mod templates;
pub mod types;

pub use analyzer::PromptAnalyzer;
pub use enhancer::PromptEnhancer;
pub use pipeline::PromptPipeline;
pub use types::{
    Analysis, Complexity, EnhancedPrompt, ImprovementMetrics, ModelRecommendation, PromptReport,
    TaskType,
};
