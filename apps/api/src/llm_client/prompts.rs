// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the pieces they share.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction that keeps the model from inventing candidate history.
pub const GROUNDING_INSTRUCTION: &str = "Base every statement on the candidate profile provided. \
    Do NOT infer, interpolate, or invent employers, dates, degrees, or skills. \
    If the profile does not support a claim, omit it.";
