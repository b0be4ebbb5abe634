//! Answer Drafter: pluggable backend that drafts answers to the twelve
//! standard recruiter questions from a portfolio context.
//!
//! `AppState` holds an `Option<Arc<dyn AnswerDrafter>>`; `None` when no
//! provider key is configured.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::analysis::classifier::Classification;
use crate::assistant::prompts::{
    CHAT_ANSWERS_PROMPT_TEMPLATE, CHAT_ANSWERS_SYSTEM, MISSING_ANSWER_PLACEHOLDER,
    PROFESSION_HINT_TEMPLATE,
};
use crate::errors::AppError;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;
use crate::templates::catalog::template_for_classification;

/// Keys the front-end cannot render without.
pub const REQUIRED_ANSWER_KEYS: [&str; 3] = ["best_project", "role_contribution", "core_skills"];

#[async_trait]
pub trait AnswerDrafter: Send + Sync {
    /// Returns a JSON object keyed by question id.
    async fn draft(
        &self,
        portfolio_context: &str,
        hint: Option<Classification>,
    ) -> Result<Map<String, Value>, AppError>;

    /// Backend label, reported to callers for transparency.
    fn backend(&self) -> &str;
}

/// Drafts answers through Gemini.
pub struct GeminiDrafter(pub LlmClient);

#[async_trait]
impl AnswerDrafter for GeminiDrafter {
    async fn draft(
        &self,
        portfolio_context: &str,
        hint: Option<Classification>,
    ) -> Result<Map<String, Value>, AppError> {
        let prompt = build_prompt(portfolio_context, hint.as_ref());
        let system = format!("{CHAT_ANSWERS_SYSTEM}\n{GROUNDING_INSTRUCTION}\n{JSON_ONLY_SYSTEM}");

        let answers: Map<String, Value> = self
            .0
            .call_json(&prompt, &system)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))?;

        Ok(fill_required_answers(answers))
    }

    fn backend(&self) -> &str {
        self.0.model()
    }
}

pub fn build_prompt(portfolio_context: &str, hint: Option<&Classification>) -> String {
    let profession_hint = hint.map(profession_hint).unwrap_or_default();
    CHAT_ANSWERS_PROMPT_TEMPLATE
        .replace("{profession_hint}", &profession_hint)
        .replace("{portfolio_context}", portfolio_context)
}

fn profession_hint(c: &Classification) -> String {
    PROFESSION_HINT_TEMPLATE
        .replace("{profession}", c.profession.as_str())
        .replace("{strength}", c.strength.as_str())
        .replace("{template}", template_for_classification(c).name)
}

/// Back-fills the required keys the model omitted.
pub fn fill_required_answers(mut answers: Map<String, Value>) -> Map<String, Value> {
    for key in REQUIRED_ANSWER_KEYS {
        answers
            .entry(key)
            .or_insert_with(|| Value::String(MISSING_ANSWER_PLACEHOLDER.to_string()));
    }
    answers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::keywords::{Profession, Strength};
    use serde_json::json;

    #[test]
    fn test_prompt_without_hint() {
        let prompt = build_prompt("프로젝트 A: 결제 API", None);
        assert!(prompt.contains("프로젝트 A: 결제 API"));
        assert!(!prompt.contains("{profession_hint}"));
        assert!(!prompt.contains("[작성 방향]"));
    }

    #[test]
    fn test_prompt_with_hint_names_template() {
        let hint = Classification {
            profession: Profession::Designer,
            strength: Strength::Ux,
        };
        let prompt = build_prompt("context", Some(&hint));
        assert!(prompt.contains("'designer'"));
        assert!(prompt.contains("'ux'"));
        assert!(prompt.contains("Case Study"));
    }

    #[test]
    fn test_required_keys_back_filled() {
        let answers = json!({ "core_skills": "Rust", "cycle": "yes" });
        let Value::Object(map) = answers else {
            unreachable!()
        };
        let filled = fill_required_answers(map);
        assert_eq!(filled["core_skills"], "Rust");
        assert_eq!(filled["best_project"], MISSING_ANSWER_PLACEHOLDER);
        assert_eq!(filled["role_contribution"], MISSING_ANSWER_PLACEHOLDER);
        assert_eq!(filled["cycle"], "yes");
    }
}
