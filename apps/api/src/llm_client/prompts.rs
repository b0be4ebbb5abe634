// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps generated copy tied to what the applicant actually provided.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Use only the projects and facts present in the provided portfolio context. \
    Never mention projects that are not in the current context. \
    If the context does not support a claim, omit it.";
