use serde::{Deserialize, Serialize};

/// Contact fields pulled out of a resume. A field is `None` when no pattern
/// matched; it is never an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
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

/// Output of the section extractor. Built once per parse and handed to the
/// caller; nothing mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResumeData {
    /// The input text, byte-for-byte.
    pub full_text: String,
    pub personal_info: PersonalInfo,
    pub skills: String,
    pub experience: String,
    pub projects: String,
    pub education: String,
    pub certifications: String,
}

/// The five sections the extractor collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
}

impl SectionKey {
    pub const ALL: [SectionKey; 5] = [
        SectionKey::Skills,
        SectionKey::Experience,
        SectionKey::Projects,
        SectionKey::Education,
        SectionKey::Certifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Skills => "skills",
            SectionKey::Experience => "experience",
            SectionKey::Projects => "projects",
            SectionKey::Education => "education",
            SectionKey::Certifications => "certifications",
        }
    }
}

impl ParsedResumeData {
    pub fn section(&self, key: SectionKey) -> &str {
        match key {
            SectionKey::Skills => &self.skills,
            SectionKey::Experience => &self.experience,
            SectionKey::Projects => &self.projects,
            SectionKey::Education => &self.education,
            SectionKey::Certifications => &self.certifications,
        }
    }

    pub(crate) fn section_mut(&mut self, key: SectionKey) -> &mut String {
        match key {
            SectionKey::Skills => &mut self.skills,
            SectionKey::Experience => &mut self.experience,
            SectionKey::Projects => &mut self.projects,
            SectionKey::Education => &mut self.education,
            SectionKey::Certifications => &mut self.certifications,
        }
    }
}
