// Prompt constants and prompt builders for profile summaries and job matching.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::matching::job_description::{JobDescription, SKILL_CATEGORIES};
use crate::profile::models::ProfileData;

pub const SUMMARY_SYSTEM: &str = "You are an expert career advisor and resume writer. \
    Your task is to create a concise, professional summary of a job candidate based on their \
    profile information. Focus on highlighting their relevant skills, experience, and \
    qualifications. Be objective and professional. The summary should be 2-3 paragraphs.";

/// Job-match system prompt. Replace `{categories}`, `{categories_json}`,
/// `{json_only}` and `{grounding}` before sending.
pub const MATCH_SYSTEM_TEMPLATE: &str = r#"You are an AI recruiting assistant specializing in job matching analysis. Analyze the candidate's profile against the job description and provide:

1. An overall match score (0-100)
2. A list of 3-5 strengths (skills/experiences that align well with the job)
3. A list of 2-4 gaps or improvement areas
4. A list of 2-3 specific recommendations for the candidate
5. A skills analysis with scores (0-100) for these categories: {categories}
6. A brief summary paragraph explaining the match results

{grounding}

Format your response as JSON like this:
{
  "score": 75,
  "strengths": ["Strength 1", "Strength 2", "Strength 3"],
  "gaps": ["Gap 1", "Gap 2"],
  "recommendations": ["Recommendation 1", "Recommendation 2"],
  "skillsAnalysis": {categories_json},
  "summary": "Summary text here."
}

{json_only}"#;

pub fn match_system_prompt() -> String {
    let categories_json = format!(
        "{{ {} }}",
        SKILL_CATEGORIES
            .iter()
            .map(|c| format!("\"{c}\": 70"))
            .collect::<Vec<_>>()
            .join(", ")
    );
    MATCH_SYSTEM_TEMPLATE
        .replace("{categories}", &SKILL_CATEGORIES.join(", "))
        .replace("{categories_json}", &categories_json)
        .replace("{grounding}", crate::llm_client::prompts::GROUNDING_INSTRUCTION)
        .replace("{json_only}", crate::llm_client::prompts::JSON_ONLY_INSTRUCTION)
}

pub fn match_user_prompt(profile: &ProfileData, job: &JobDescription) -> String {
    format!(
        "# CANDIDATE PROFILE:\n{}\n\n# JOB DESCRIPTION TO MATCH AGAINST:\n{}\n\n\
         Please analyze how well this candidate matches the job requirements and provide \
         detailed feedback as JSON.",
        format_profile_data(profile),
        format_job_description(job)
    )
}

/// Renders the candidate profile as a markdown block. Empty fields are left out.
pub fn format_profile_data(profile: &ProfileData) -> String {
    let info = &profile.personal_info;
    let se = &profile.skills_experience;
    let q = &profile.hiring_manager_questions;

    let mut out = String::from("# CANDIDATE PROFILE\n\n## PERSONAL INFORMATION\n");
    push_field(&mut out, "Name", display_name(profile).as_deref());
    push_field(&mut out, "Email", info.email.as_deref());
    push_field(&mut out, "Phone", info.phone.as_deref());
    push_field(&mut out, "Location", info.location.as_deref());
    push_field(&mut out, "Github", info.github.as_deref());
    push_field(&mut out, "LinkedIn", info.linkedin.as_deref());

    out.push_str("\n## SKILLS & EXPERIENCE\n");
    push_field(&mut out, "Skills", Some(se.skills.as_str()));
    push_field(&mut out, "Experience", Some(se.experience.as_str()));
    push_field(&mut out, "Projects", Some(se.projects.as_str()));
    push_field(&mut out, "Education", Some(se.education.as_str()));
    push_field(&mut out, "Certifications", Some(se.certifications.as_str()));

    out.push_str("\n## RESUME TEXT\n");
    out.push_str(profile.resume_text.trim());
    out.push('\n');

    out.push_str("\n## HIRING MANAGER QUESTIONS\n");
    push_field(&mut out, "Technical Problem", Some(q.technical_problem.as_str()));
    push_field(&mut out, "Continuous Learning", Some(q.continuous_learning.as_str()));
    push_field(
        &mut out,
        "Performance Optimization",
        Some(q.performance_optimization.as_str()),
    );
    out
}

pub fn format_job_description(job: &JobDescription) -> String {
    let numbered = |items: &[&str]| {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {item}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "# JOB DESCRIPTION\n\n\
         ## POSITION\nTitle: {}\nLocation: {}\n\n\
         ## COMPANY DETAILS\nTeam Size: {}\nIndustry: {}\nReports To: {}\n\n\
         ## SUMMARY\n{}\n\n\
         ## RESPONSIBILITIES\n{}\n\n\
         ## REQUIREMENTS\n{}\n\n\
         ## COMPENSATION & BENEFITS\nCompensation: {}\nBenefits: {}\n",
        job.title,
        job.location,
        job.company_details.team_size,
        job.company_details.industry,
        job.company_details.reports_to,
        job.summary,
        numbered(job.responsibilities),
        numbered(job.requirements),
        job.compensation,
        job.benefits,
    )
}

/// `name`, or `first_name last_name` when only the split fields are set.
fn display_name(profile: &ProfileData) -> Option<String> {
    let info = &profile.personal_info;
    if let Some(name) = info.name.as_deref().filter(|n| !n.trim().is_empty()) {
        return Some(name.to_string());
    }
    let parts: Vec<&str> = [info.first_name.as_deref(), info.last_name.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}

fn push_field(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        out.push_str(label);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::job_description::JOB_DESCRIPTION;
    use crate::profile::models::ContactDetails;

    #[test]
    fn test_profile_block_skips_empty_fields() {
        let mut profile = ProfileData::default();
        profile.merge_personal_info(ContactDetails {
            email: Some("jane@doe.io".to_string()),
            ..Default::default()
        });
        profile.skills_experience.skills = "Rust".to_string();

        let block = format_profile_data(&profile);
        assert!(block.contains("Email: jane@doe.io"));
        assert!(block.contains("Skills: Rust"));
        assert!(!block.contains("Phone:"));
        assert!(!block.contains("Projects:"));
        assert!(!block.contains("Technical Problem:"));
    }

    #[test]
    fn test_display_name_from_split_fields() {
        let mut profile = ProfileData::default();
        profile.merge_personal_info(ContactDetails {
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            ..Default::default()
        });
        assert!(format_profile_data(&profile).contains("Name: Jane Doe"));
    }

    #[test]
    fn test_job_description_is_numbered() {
        let block = format_job_description(&JOB_DESCRIPTION);
        assert!(block.contains("Title: C++ Software Engineer"));
        assert!(block.contains("1. 3+ years of true C++ programming experience"));
        assert!(block.contains("Reports To: VP of Engineering"));
    }

    #[test]
    fn test_match_system_prompt_lists_categories() {
        let prompt = match_system_prompt();
        for category in SKILL_CATEGORIES {
            assert!(prompt.contains(category));
        }
        assert!(!prompt.contains("{categories"));
        assert!(!prompt.contains("{json_only}"));
    }
}
