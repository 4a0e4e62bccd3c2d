use super::types::TaskType;

const TASK_KEYWORDS: [(TaskType, &[&str]); 3] = [
    (TaskType::Code, &["code", "algorithm", "function", "implement", "programming"]),
    (TaskType::Writing, &["write", "essay", "article", "story", "draft", "blog"]),
    (
        TaskType::Analysis,
        &["analyze", "research", "data", "study", "investigate", "examine"],
    ),
];

/// Guess a task type from keywords alone, without calling the LLM.
///
/// Sets are checked in order code, writing, analysis and the first one with a
/// substring hit wins, so "write a function" is `Code`.
pub fn classify(prompt: &str) -> TaskType {
    let lower = prompt.to_lowercase();

    TASK_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(task, _)| *task)
        .unwrap_or(TaskType::General)
}
