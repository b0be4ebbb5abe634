// AI assistant: thin proxy to the generative-AI provider.
// All LLM calls go through llm_client; no direct provider calls here.

pub mod drafter;
pub mod handlers;
pub mod prompts;
