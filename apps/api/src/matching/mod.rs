// Job matching: static job description, prompt building, profile summary and
// match analysis. All LLM calls go through llm_client.

pub mod analysis;
pub mod handlers;
pub mod job_description;
pub mod prompts;
