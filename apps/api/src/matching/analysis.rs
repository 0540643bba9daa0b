//! Job-match analysis and profile summaries via the LLM client.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::llm_client::{ChatMessage, LlmClient, LlmError};
use crate::matching::job_description::{JobDescription, SKILL_CATEGORIES};
use crate::matching::prompts::{
    format_profile_data, match_system_prompt, match_user_prompt, SUMMARY_SYSTEM,
};
use crate::profile::models::ProfileData;

pub const FALLBACK_SUMMARY: &str = "Unable to generate summary.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatchAnalysis {
    /// 0 – 100
    pub score: u32,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendations: Vec<String>,
    /// Category → 0 – 100. Always carries every entry of `SKILL_CATEGORIES`.
    pub skills_analysis: BTreeMap<String, u32>,
    pub summary: String,
}

/// The model's JSON as it arrives; every field may be missing or mistyped.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAnalysis {
    score: Option<Value>,
    strengths: Option<Value>,
    gaps: Option<Value>,
    recommendations: Option<Value>,
    #[serde(alias = "skillsAnalysis")]
    skills_analysis: Option<Value>,
    summary: Option<Value>,
}

impl From<RawAnalysis> for JobMatchAnalysis {
    fn from(raw: RawAnalysis) -> Self {
        let mut skills_analysis: BTreeMap<String, u32> = SKILL_CATEGORIES
            .iter()
            .map(|c| (c.to_string(), 0))
            .collect();
        if let Some(Value::Object(map)) = raw.skills_analysis {
            for (category, value) in map {
                if let Some(score) = coerce_score(&value) {
                    skills_analysis.insert(category, score);
                }
            }
        }

        JobMatchAnalysis {
            score: raw.score.as_ref().and_then(coerce_score).unwrap_or(0),
            strengths: coerce_list(raw.strengths),
            gaps: coerce_list(raw.gaps),
            recommendations: coerce_list(raw.recommendations),
            skills_analysis,
            summary: raw
                .summary
                .as_ref()
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(FALLBACK_SUMMARY)
                .to_string(),
        }
    }
}

/// Accepts numbers or numeric strings; clamps to 0 – 100.
fn coerce_score(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then(|| n.round().clamp(0.0, 100.0) as u32)
}

fn coerce_list(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

/// Writes a 2–3 paragraph summary of the candidate.
pub async fn generate_profile_summary(
    profile: &ProfileData,
    llm: &LlmClient,
) -> Result<String, LlmError> {
    let messages = [
        ChatMessage::system(SUMMARY_SYSTEM),
        ChatMessage::user(format_profile_data(profile)),
    ];
    let summary = llm.call_text(&messages).await?;
    info!("Generated profile summary ({} chars)", summary.len());
    Ok(summary)
}

/// Scores the candidate against `job`.
pub async fn analyze_job_match(
    profile: &ProfileData,
    job: &JobDescription,
    llm: &LlmClient,
) -> Result<JobMatchAnalysis, LlmError> {
    let messages = [
        ChatMessage::system(match_system_prompt()),
        ChatMessage::user(match_user_prompt(profile, job)),
    ];
    let analysis: JobMatchAnalysis = llm.call_json::<RawAnalysis>(&messages).await?.into();
    info!("Job match analysis complete: score={}", analysis.score);
    Ok(analysis)
}
