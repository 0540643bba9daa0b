//! Section heading table.
//!
//! Every heading the scanner recognizes lives in [`HEADING_TABLE`]. Adding a
//! synonym means adding a pattern here; the scan logic in `sections.rs` never
//! names a heading itself.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::resume::models::SectionKey;

/// What a recognized heading line starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingTarget {
    /// A section whose content is collected into `ParsedResumeData`.
    Section(SectionKey),
    /// A section we do not collect. It still ends whatever section precedes it.
    Boundary,
}

/// Ordered (target, patterns) pairs. Patterns are regex fragments matched
/// case-insensitively against a whole trimmed line, with an optional trailing
/// colon. Earlier rows win when a line matches more than one row.
pub const HEADING_TABLE: &[(HeadingTarget, &[&str])] = &[
    (
        HeadingTarget::Section(SectionKey::Skills),
        &[
            r"skills",
            r"technical\s+skills",
            r"key\s+skills",
            r"core\s+competenc(?:y|ies)",
            r"technologies",
            r"skills\s+(?:&|and)\s+technologies",
            r"(?:technical\s+)?expertise",
            r"proficiencies",
        ],
    ),
    (
        HeadingTarget::Section(SectionKey::Experience),
        &[
            r"experience",
            r"work\s+experience",
            r"professional\s+experience",
            r"relevant\s+experience",
            r"employment(?:\s+history)?",
            r"career\s+history",
            r"work\s+history",
        ],
    ),
    (
        HeadingTarget::Section(SectionKey::Projects),
        &[
            r"projects",
            r"(?:software|personal|key|notable|relevant|academic)\s+projects",
        ],
    ),
    (
        HeadingTarget::Section(SectionKey::Education),
        &[
            r"education",
            r"academic\s+(?:background|qualifications)",
            r"educational\s+background",
        ],
    ),
    (
        HeadingTarget::Section(SectionKey::Certifications),
        &[
            r"certifications",
            r"certificates",
            r"professional\s+certifications",
            r"accreditations",
            r"licenses\s+(?:&|and)\s+certifications",
            r"certifications\s+(?:&|and)\s+licenses",
        ],
    ),
    (
        HeadingTarget::Boundary,
        &[
            r"(?:professional\s+)?summary",
            r"(?:career\s+)?objective",
            r"achievements",
            r"awards(?:\s+(?:&|and)\s+honou?rs)?",
            r"honou?rs",
            r"publications",
            r"languages",
            r"interests",
            r"activities",
            r"extracurricular\s+activities",
            r"volunteer(?:ing|\s+experience)?",
            r"references",
            r"additional\s+information",
        ],
    ),
];

static COMPILED_HEADINGS: Lazy<Vec<(HeadingTarget, Regex)>> = Lazy::new(|| {
    HEADING_TABLE
        .iter()
        .map(|(target, patterns)| {
            let pattern = format!(r"(?i)^(?:{})\s*:?$", patterns.join("|"));
            let regex = Regex::new(&pattern).expect("heading table patterns are valid regex");
            (*target, regex)
        })
        .collect()
});

/// Classifies a line as a heading, or returns `None` for ordinary content.
pub fn classify_heading(line: &str) -> Option<HeadingTarget> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    COMPILED_HEADINGS
        .iter()
        .find(|(_, regex)| regex.is_match(line))
        .map(|(target, _)| *target)
}

pub fn is_heading(line: &str) -> bool {
    classify_heading(line).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_compiles_one_regex_per_row() {
        assert_eq!(COMPILED_HEADINGS.len(), HEADING_TABLE.len());
    }

    #[test]
    fn test_every_section_key_has_a_row() {
        for key in SectionKey::ALL {
            assert!(
                HEADING_TABLE
                    .iter()
                    .any(|(t, _)| *t == HeadingTarget::Section(key)),
                "no heading row for {}",
                key.as_str()
            );
        }
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        for line in ["SKILLS", "Skills", "skills", "  Technical Skills  "] {
            assert_eq!(
                classify_heading(line),
                Some(HeadingTarget::Section(SectionKey::Skills)),
                "{line}"
            );
        }
    }

    #[test]
    fn test_classify_accepts_trailing_colon() {
        assert_eq!(
            classify_heading("Work Experience:"),
            Some(HeadingTarget::Section(SectionKey::Experience))
        );
        assert_eq!(
            classify_heading("EDUCATION :"),
            Some(HeadingTarget::Section(SectionKey::Education))
        );
    }

    #[test]
    fn test_classify_synonyms() {
        assert_eq!(
            classify_heading("PROFESSIONAL EXPERIENCE"),
            Some(HeadingTarget::Section(SectionKey::Experience))
        );
        assert_eq!(
            classify_heading("Personal Projects"),
            Some(HeadingTarget::Section(SectionKey::Projects))
        );
        assert_eq!(
            classify_heading("Academic Background"),
            Some(HeadingTarget::Section(SectionKey::Education))
        );
        assert_eq!(
            classify_heading("Licenses & Certifications"),
            Some(HeadingTarget::Section(SectionKey::Certifications))
        );
        assert_eq!(
            classify_heading("Core Competencies"),
            Some(HeadingTarget::Section(SectionKey::Skills))
        );
    }

    #[test]
    fn test_boundary_headings() {
        for line in ["AWARDS", "Publications", "Professional Summary", "References:"] {
            assert_eq!(classify_heading(line), Some(HeadingTarget::Boundary), "{line}");
        }
    }

    #[test]
    fn test_heading_must_be_whole_line() {
        assert_eq!(classify_heading("Skills Used: Rust"), None);
        assert_eq!(classify_heading("Experience with distributed systems"), None);
        assert_eq!(classify_heading("My projects"), None);
        assert!(!is_heading(""));
        assert!(!is_heading("   "));
    }
}
