//! Contact-field heuristics. Each field is an independent regex pass over the
//! text; the first match in document order wins.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::resume::headings::is_heading;
use crate::resume::models::PersonalInfo;

/// Lines searched for the location fallback and for the contact block.
const HEADER_LINES: usize = 10;
const MAX_NAME_TOKENS: usize = 4;

static UPPERCASE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z ]*$").unwrap());
static CAPITALIZED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)+)").unwrap());
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap());
static LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z .'-]*,[ \t]*[A-Z]{2}\b").unwrap());
static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/[A-Za-z0-9_-]+").unwrap());
static GITHUB: Lazy<Regex> = Lazy::new(|| Regex::new(r"github\.com/[A-Za-z0-9_-]+").unwrap());

pub fn extract_personal_info(text: &str) -> PersonalInfo {
    let header: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(HEADER_LINES)
        .collect();

    PersonalInfo {
        name: extract_name(text, header.first().copied()),
        email: first_match(&EMAIL, text),
        phone: first_match(&PHONE, text),
        location: extract_location(&header),
        linkedin: first_match(&LINKEDIN, text).map(|m| format!("https://{m}")),
        github: first_match(&GITHUB, text).map(|m| format!("https://{m}")),
    }
}

fn first_match(regex: &Regex, haystack: &str) -> Option<String> {
    regex
        .find(haystack)
        .map(|m| m.as_str().trim().to_string())
        .filter(|m| !m.is_empty())
}

fn extract_name(text: &str, first_line: Option<&str>) -> Option<String> {
    if let Some(line) = first_line {
        let tokens = line.split_whitespace().count();
        if UPPERCASE_NAME.is_match(line) && tokens <= MAX_NAME_TOKENS && !is_heading(line) {
            return Some(title_case(line));
        }
    }

    CAPITALIZED_NAME
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn title_case(line: &str) -> String {
    line.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Looks first at the line right after the contact block, then anywhere in
/// the header.
fn extract_location(header: &[&str]) -> Option<String> {
    let contact_end = header.iter().rposition(|line| is_contact_line(line));

    if let Some(line) = contact_end.and_then(|idx| header.get(idx + 1)) {
        if let Some(location) = first_match(&LOCATION, line) {
            return Some(location);
        }
    }

    header
        .iter()
        .find_map(|line| first_match(&LOCATION, line))
}

fn is_contact_line(line: &str) -> bool {
    EMAIL.is_match(line) || PHONE.is_match(line) || LINKEDIN.is_match(line) || GITHUB.is_match(line)
}
