//! Best-effort extraction of an [`Analysis`] from free-form LLM output.
//!
//! Models are asked for JSON but frequently wrap it in prose or code fences,
//! truncate it, or rename fields. Nothing here fails: each field is scraped
//! independently and falls back to a fixed default.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};
use super::heuristics;
use super::types::{clamp_score, Analysis, Complexity, TaskType};

pub const DEFAULT_SCORE: f64 = 0.5;
pub const DEFAULT_MISSING_ELEMENT: &str = "Insufficient context details";
pub const NO_STRUCTURE_MESSAGE: &str = "No structured response";

lazy_static! {
    static ref BRACE_BLOCK: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
    static ref MISSING_PATTERNS: [Regex; 2] = [
        Regex::new(r#"(?is)"missing_elements":\s*\[(.*?)\]"#).unwrap(),
        Regex::new(r"(?is)missing\s*elements?:\s*\[(.*?)\]").unwrap(),
    ];
    static ref QUOTED: Regex = Regex::new(r#""([^"]*)""#).unwrap();
    static ref CONTEXT_SCORE: Regex = Regex::new(r#""context_score":\s*(\d+\.?\d*)"#).unwrap();
    static ref CLARITY_SCORE: Regex = Regex::new(r#""clarity_score":\s*(\d+\.?\d*)"#).unwrap();
}

pub fn parse(raw_text: &str, original_prompt: &str) -> Analysis {
    let Some(block) = BRACE_BLOCK.find(raw_text) else {
        warn!("LLM response has no brace-delimited block, using fallback analysis");
        return fallback(original_prompt, NO_STRUCTURE_MESSAGE);
    };
    let block = block.as_str();
    debug!("Parsing analysis block of {} bytes", block.len());

    Analysis::new(
        extract_task_type(block, original_prompt),
        extract_complexity(block),
        extract_missing_elements(block),
        extract_score(block, &CONTEXT_SCORE),
        extract_score(block, &CLARITY_SCORE),
    )
}

/// Analysis used when the LLM call fails or its output has no usable structure.
pub fn fallback(original_prompt: &str, message: &str) -> Analysis {
    Analysis::new(
        heuristics::classify(original_prompt),
        Complexity::Medium,
        vec![
            "Insufficient context".to_string(),
            format!("Parse error: {}", message),
        ],
        0.4,
        0.5,
    )
}

fn extract_task_type(block: &str, original_prompt: &str) -> TaskType {
    let lower = block.to_lowercase();
    TaskType::PRIORITY
        .into_iter()
        .find(|task| lower.contains(task.as_str()))
        .unwrap_or_else(|| heuristics::classify(original_prompt))
}

fn extract_complexity(block: &str) -> Complexity {
    let lower = block.to_lowercase();
    Complexity::PRIORITY
        .into_iter()
        .find(|level| lower.contains(&level.as_str().to_lowercase()))
        .unwrap_or(Complexity::Medium)
}

fn extract_missing_elements(block: &str) -> Vec<String> {
    for pattern in MISSING_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(block) {
            let list = captures.get(1).map_or("", |m| m.as_str());
            return QUOTED
                .captures_iter(list)
                .filter_map(|c| c.get(1))
                .map(|m| m.as_str().trim().to_string())
                .filter(|element| !element.is_empty())
                .collect();
        }
    }

    vec![DEFAULT_MISSING_ELEMENT.to_string()]
}

fn extract_score(block: &str, pattern: &Regex) -> f64 {
    pattern
        .captures(block)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(clamp_score)
        .unwrap_or(DEFAULT_SCORE)
}
