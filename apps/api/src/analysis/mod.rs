// Content analysis: keyword-based profession/strength classification and
// project ranking. No LLM calls here.

pub mod classifier;
pub mod handlers;
pub mod keywords;
pub mod project_ranker;
