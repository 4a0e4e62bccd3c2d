use std::fmt;
use serde::{Deserialize, Serialize};

/// Coarse category of what a prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TaskType {
    Code,
    Writing,
    Analysis,
    General,
}

impl TaskType {
    /// Scan order used wherever several categories could match the same text.
    pub const PRIORITY: [TaskType; 4] = [
        TaskType::Code,
        TaskType::Writing,
        TaskType::Analysis,
        TaskType::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Code => "code",
            TaskType::Writing => "writing",
            TaskType::Analysis => "analysis",
            TaskType::General => "general",
        }
    }

    /// Anything that isn't a known category is treated as `General`.
    pub fn normalize(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "code" => TaskType::Code,
            "writing" => TaskType::Writing,
            "analysis" => TaskType::Analysis,
            _ => TaskType::General,
        }
    }
}

impl From<String> for TaskType {
    fn from(value: String) -> Self {
        Self::normalize(&value)
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub const PRIORITY: [Complexity; 3] = [Complexity::Low, Complexity::Medium, Complexity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        }
    }

    /// Anything that isn't a known level is treated as `Medium`.
    pub fn normalize(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => Complexity::Low,
            "high" => Complexity::High,
            _ => Complexity::Medium,
        }
    }
}

impl From<String> for Complexity {
    fn from(value: String) -> Self {
        Self::normalize(&value)
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restrict a score to `[0, 1]`. NaN collapses to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Round to two decimal places from the exact binary value, ties to even.
///
/// Scaling by 100 first would round values such as 0.625 away from zero.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

fn default_task_type() -> TaskType {
    TaskType::General
}

fn default_complexity() -> Complexity {
    Complexity::Medium
}

fn default_context_score() -> f64 {
    0.4
}

fn default_clarity_score() -> f64 {
    0.5
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_score)
}

/// What the analysis step concluded about a prompt.
///
/// Missing fields decode to the same defaults the enhancer falls back on, so a
/// partial analysis posted by a client is still usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default = "default_task_type")]
    pub task_type: TaskType,
    #[serde(default = "default_complexity")]
    pub complexity: Complexity,
    #[serde(default)]
    pub missing_elements: Vec<String>,
    #[serde(default = "default_context_score", deserialize_with = "deserialize_score")]
    pub context_score: f64,
    #[serde(default = "default_clarity_score", deserialize_with = "deserialize_score")]
    pub clarity_score: f64,
}

impl Analysis {
    pub fn new(
        task_type: TaskType,
        complexity: Complexity,
        missing_elements: Vec<String>,
        context_score: f64,
        clarity_score: f64,
    ) -> Self {
        Self {
            task_type,
            complexity,
            missing_elements,
            context_score: clamp_score(context_score),
            clarity_score: clamp_score(clarity_score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecommendation {
    pub model: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementMetrics {
    pub clarity: f64,
    pub context: f64,
    pub specificity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedPrompt {
    pub text: String,
    pub technique: String,
    pub improvement_metrics: ImprovementMetrics,
}

/// Everything produced for one prompt by the full pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptReport {
    pub analysis: Analysis,
    pub recommended_llm: ModelRecommendation,
    pub enhanced_prompt: EnhancedPrompt,
}
