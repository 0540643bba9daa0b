//! Heading-driven line scan that splits resume text into sections.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::resume::headings::{classify_heading, HeadingTarget};
use crate::resume::models::ParsedResumeData;
use crate::resume::personal_info::extract_personal_info;

/// Candidate sub-label such as `Programming Languages:` or `Tools & Technologies:`.
/// Letters only, so `C++:` and `C#:` are never treated as labels.
static SKILL_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z][A-Za-z &/-]{0,39}):[ \t]*(.*)$").unwrap());
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[•●▪◦‣*-]\s*").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static COMMAS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*(?:,\s*)+").unwrap());

/// Splits resume text into contact fields and named sections.
///
/// Never fails: text with no recognizable structure yields empty sections and
/// absent contact fields.
pub fn extract_sections(text: &str) -> ParsedResumeData {
    let mut parsed = ParsedResumeData {
        full_text: text.to_string(),
        personal_info: extract_personal_info(text),
        ..Default::default()
    };

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut i = 0;
    while i < lines.len() {
        let key = match classify_heading(lines[i]) {
            Some(HeadingTarget::Section(key)) if parsed.section(key).is_empty() => key,
            Some(HeadingTarget::Section(key)) => {
                debug!("Ignoring repeated {} heading at line {}", key.as_str(), i);
                i += 1;
                continue;
            }
            _ => {
                i += 1;
                continue;
            }
        };

        let start = i + 1;
        let mut end = start;
        while end < lines.len() && classify_heading(lines[end]).is_none() {
            end += 1;
        }

        *parsed.section_mut(key) = lines[start..end].join("\n").trim().to_string();
        // The stopping line is re-examined so it can open its own section.
        i = end;
    }

    parsed.skills = normalize_skills(&parsed.skills);
    parsed
}

/// Flattens a multi-line skills block into one comma-separated line.
pub fn normalize_skills(raw: &str) -> String {
    let items: Vec<String> = raw
        .lines()
        .map(|line| {
            let line = BULLET.replace(line.trim(), "");
            strip_skill_label(&line).trim().to_string()
        })
        .filter(|line| !line.is_empty())
        .collect();

    let joined = items.join(", ");
    let collapsed = WHITESPACE.replace_all(&joined, " ");
    let commas = COMMAS.replace_all(&collapsed, ", ");
    commas
        .trim_matches(|c: char| c == ',' || c.is_whitespace())
        .to_string()
}

/// Drops a leading category label. A one-word prefix only counts as a label
/// when a list follows it (`Languages: Rust, Go`), so `Go: concurrency` stays.
fn strip_skill_label(line: &str) -> &str {
    let Some(caps) = SKILL_LABEL.captures(line) else {
        return line;
    };
    let (label, rest) = match (caps.get(1), caps.get(2)) {
        (Some(label), Some(rest)) => (label.as_str(), rest.as_str()),
        _ => return line,
    };
    if rest.starts_with("//") {
        return line;
    }
    let multi_word = label.split_whitespace().count() >= 2;
    if multi_word || rest.contains(',') {
        rest
    } else {
        line
    }
}
