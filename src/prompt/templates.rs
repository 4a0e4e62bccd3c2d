//! Instruction templates sent to the LLM.
//!
//! Placeholders are written `{name}`. Filling is a single left-to-right pass, so
//! braces inside substituted values are never expanded again.

use super::types::Analysis;

pub const ANALYSIS_TEMPLATE: &str = "Perform an in-depth prompt analysis with these guidelines:

Analysis Criteria:
1. Identify primary task type
2. Assess prompt complexity
3. Determine missing contextual elements
4. Evaluate context and clarity scores

Provide output in JSON format with:
- task_type (string)
- complexity (Low/Medium/High)
- missing_elements (list)
- context_score (0-1)
- clarity_score (0-1)

Prompt: {prompt}
";

pub const ENHANCEMENT_TEMPLATE: &str = "Enhance the given prompt to be concise and clear, addressing any missing elements.
Ensure the prompt is specific and includes detailed instructions.

Original Prompt: {prompt}
Task Type: {task_type}
Complexity: {complexity}
Missing Elements: {missing_elements}

Provide a concise, clear enhancement of the original prompt that addresses any missing elements.
Focus on adding specificity and clarity without unnecessary details.

Enhanced Prompt: Write a {task_type} to {prompt}.
Include detailed steps, {missing_elements}, and any necessary context for clarity.
";

/// Substitute `{name}` markers. Unknown markers are left untouched.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

pub fn analysis_prompt(prompt: &str) -> String {
    fill(ANALYSIS_TEMPLATE, &[("prompt", prompt)])
}

pub fn enhancement_prompt(prompt: &str, analysis: &Analysis) -> String {
    let missing_elements = analysis.missing_elements.join(", ");
    fill(
        ENHANCEMENT_TEMPLATE,
        &[
            ("prompt", prompt),
            ("task_type", analysis.task_type.as_str()),
            ("complexity", analysis.complexity.as_str()),
            ("missing_elements", &missing_elements),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::types::{Complexity, TaskType};

    #[test]
    fn analysis_prompt_embeds_user_text() {
        let filled = analysis_prompt("Write a sorting algorithm in Python.");
        assert!(filled.ends_with("Prompt: Write a sorting algorithm in Python.\n"));
        assert!(!filled.contains("{prompt}"));
    }

    #[test]
    fn enhancement_prompt_fills_every_marker() {
        let analysis = Analysis::new(
            TaskType::Code,
            Complexity::Low,
            vec!["array type".into(), "sorting algorithm".into()],
            0.4,
            0.5,
        );
        let filled = enhancement_prompt("write code for sorting array", &analysis);

        assert!(filled.contains("Original Prompt: write code for sorting array"));
        assert!(filled.contains("Task Type: code"));
        assert!(filled.contains("Complexity: Low"));
        assert!(filled.contains("Missing Elements: array type, sorting algorithm"));
        assert!(filled.contains("Write a code to write code for sorting array."));
        assert!(!filled.contains("{task_type}"));
    }

    #[test]
    fn substituted_braces_are_not_expanded() {
        let filled = fill("A {prompt} B {other}", &[("prompt", "{other}"), ("other", "x")]);
        assert_eq!(filled, "A {other} B x");
    }

    #[test]
    fn unmatched_braces_survive() {
        assert_eq!(fill("{ json } {prompt", &[("prompt", "p")]), "{ json } {prompt");
    }
}
