use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::analysis::JobMatchAnalysis;
use crate::resume::models::{ParsedResumeData, PersonalInfo};

/// Contact details collected by the personal-info step. Also the PATCH body
/// for that step: fields left out of a patch are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsExperience {
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub projects: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub certifications: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillsExperiencePatch {
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub projects: Option<String>,
    pub education: Option<String>,
    pub certifications: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiringManagerQuestions {
    #[serde(default)]
    pub technical_problem: String,
    #[serde(default)]
    pub continuous_learning: String,
    #[serde(default)]
    pub performance_optimization: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HiringManagerQuestionsPatch {
    pub technical_problem: Option<String>,
    pub continuous_learning: Option<String>,
    pub performance_optimization: Option<String>,
}

/// Everything the wizard has collected for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    #[serde(default)]
    pub resume_uploaded: bool,
    #[serde(default)]
    pub resume_file_name: String,
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub skills_experience: SkillsExperience,
    #[serde(default)]
    pub personal_info: ContactDetails,
    #[serde(default)]
    pub hiring_manager_questions: HiringManagerQuestions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_match_analysis: Option<JobMatchAnalysis>,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            resume_uploaded: false,
            resume_file_name: String::new(),
            resume_text: String::new(),
            skills_experience: SkillsExperience::default(),
            personal_info: ContactDetails::default(),
            hiring_manager_questions: HiringManagerQuestions::default(),
            profile_summary: None,
            job_match_analysis: None,
            last_updated: Utc::now(),
        }
    }
}

impl ProfileData {
    /// Prefills the profile from a freshly parsed resume. Section text is
    /// copied verbatim; contact fields are merged so that fields the parser
    /// did not find keep their previous value. Any earlier summary or
    /// analysis described the old resume and is dropped.
    pub fn apply_parsed_resume(&mut self, file_name: &str, parsed: &ParsedResumeData) {
        self.resume_uploaded = true;
        self.resume_file_name = file_name.to_string();
        self.resume_text = parsed.full_text.clone();
        self.skills_experience = SkillsExperience {
            skills: parsed.skills.clone(),
            experience: parsed.experience.clone(),
            projects: parsed.projects.clone(),
            education: parsed.education.clone(),
            certifications: parsed.certifications.clone(),
        };
        self.merge_personal_info(ContactDetails::from(parsed.personal_info.clone()));
        self.profile_summary = None;
        self.job_match_analysis = None;
    }

    pub fn merge_personal_info(&mut self, patch: ContactDetails) {
        let info = &mut self.personal_info;
        merge_field(&mut info.name, patch.name);
        merge_field(&mut info.first_name, patch.first_name);
        merge_field(&mut info.last_name, patch.last_name);
        merge_field(&mut info.email, patch.email);
        merge_field(&mut info.phone, patch.phone);
        merge_field(&mut info.location, patch.location);
        merge_field(&mut info.linkedin, patch.linkedin);
        merge_field(&mut info.github, patch.github);
    }

    pub fn merge_skills_experience(&mut self, patch: SkillsExperiencePatch) {
        let se = &mut self.skills_experience;
        replace_if_some(&mut se.skills, patch.skills);
        replace_if_some(&mut se.experience, patch.experience);
        replace_if_some(&mut se.projects, patch.projects);
        replace_if_some(&mut se.education, patch.education);
        replace_if_some(&mut se.certifications, patch.certifications);
    }

    pub fn merge_questions(&mut self, patch: HiringManagerQuestionsPatch) {
        let q = &mut self.hiring_manager_questions;
        replace_if_some(&mut q.technical_problem, patch.technical_problem);
        replace_if_some(&mut q.continuous_learning, patch.continuous_learning);
        replace_if_some(&mut q.performance_optimization, patch.performance_optimization);
    }

    pub fn set_profile_summary(&mut self, summary: String) {
        self.profile_summary = Some(summary);
    }

    pub fn set_job_match_analysis(&mut self, analysis: JobMatchAnalysis) {
        self.job_match_analysis = Some(analysis);
    }

    /// True when there is enough material to send for analysis.
    pub fn has_analyzable_data(&self) -> bool {
        !self.resume_text.trim().is_empty()
            || !self.skills_experience.skills.trim().is_empty()
            || self
                .personal_info
                .name
                .as_deref()
                .is_some_and(|n| !n.trim().is_empty())
    }

    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

impl From<PersonalInfo> for ContactDetails {
    fn from(info: PersonalInfo) -> Self {
        Self {
            name: info.name,
            first_name: None,
            last_name: None,
            email: info.email,
            phone: info.phone,
            location: info.location,
            linkedin: info.linkedin,
            github: info.github,
        }
    }
}

fn merge_field(target: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *target = value;
    }
}

fn replace_if_some(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}
