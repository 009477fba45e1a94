//! Section boundary detection.
//!
//! A section starts at the first line matching one of its recognized
//! header spellings and runs to the nearest line that looks like a new
//! top-level header, or to the end of the text. Sections never nest; if a
//! logical section's header appears twice, only the first anchors.

use tracing::debug;

/// Header spellings that end any section when they appear on a line of
/// their own, whatever their casing.
const KNOWN_HEADERS: &[&str] = &[
    "summary",
    "skills",
    "technical skills",
    "key competencies / technical skills",
    "work experience",
    "professional experience",
    "employment history",
    "education",
    "projects",
    "certifications",
];

/// Returns the body of the first section whose header matches one of
/// `headers`, or `None` if no header line is found.
///
/// Header matching is case-insensitive, tolerates a trailing colon, and
/// tolerates `/`-joined synonyms: a line "KEY COMPETENCIES / TECHNICAL
/// SKILLS" matches the spelling "technical skills".
pub fn locate_section(text: &str, headers: &[&str]) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.iter().position(|l| is_header_line(l, headers))? + 1;
    let end = lines[start..]
        .iter()
        .position(|l| is_section_boundary(l))
        .map(|offset| start + offset)
        .unwrap_or(lines.len());
    debug!(header = lines[start - 1], lines = end - start, "section located");
    Some(lines[start..end].join("\n"))
}

fn is_header_line(line: &str, headers: &[&str]) -> bool {
    let normalized = normalize(line);
    headers.iter().any(|h| {
        normalized == *h || normalized.split('/').any(|segment| segment.trim() == *h)
    })
}

/// A line that starts a new top-level section: either a known header in
/// any casing, or a majority-uppercase line of at least 4 characters made
/// of letters, spaces and `/` only.
fn is_section_boundary(line: &str) -> bool {
    let normalized = normalize(line);
    if KNOWN_HEADERS.contains(&normalized.as_str()) {
        return true;
    }
    let trimmed = line.trim().trim_end_matches(':');
    if trimmed.len() < 4 || !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ' || c == '/') {
        return false;
    }
    let upper = trimmed.chars().filter(|c| c.is_uppercase()).count();
    let lower = trimmed.chars().filter(|c| c.is_lowercase()).count();
    upper > lower
}

fn normalize(line: &str) -> String {
    line.trim().trim_end_matches(':').trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKILL_HEADERS: &[&str] = &["technical skills", "skills"];

    #[test]
    fn body_runs_to_next_uppercase_header() {
        let text = "Intro\nSKILLS\nLanguages: Java\nTools: Git\nWORK EXPERIENCE\nother";
        let body = locate_section(text, SKILL_HEADERS).unwrap();
        assert_eq!(body, "Languages: Java\nTools: Git");
    }

    #[test]
    fn body_runs_to_end_of_text() {
        let text = "SKILLS\nLanguages: Java";
        assert_eq!(locate_section(text, SKILL_HEADERS).unwrap(), "Languages: Java");
    }

    #[test]
    fn slash_joined_header_matches_a_segment_spelling() {
        let text = "KEY COMPETENCIES / TECHNICAL SKILLS\nLanguages: Java\nEDUCATION\nx";
        let body = locate_section(text, SKILL_HEADERS).unwrap();
        assert_eq!(body, "Languages: Java");
    }

    #[test]
    fn header_matching_ignores_case_and_trailing_colon() {
        let text = "Skills:\nLanguages: Java";
        assert!(locate_section(text, SKILL_HEADERS).is_some());
    }

    #[test]
    fn content_after_colon_is_not_a_header() {
        // "Skills: Java" is a content line, not a section header.
        assert_eq!(locate_section("Skills: Java", SKILL_HEADERS), None);
    }

    #[test]
    fn known_mixed_case_header_ends_a_section() {
        let text = "SKILLS\nLanguages: Java\nEducation:\nB.Sc";
        assert_eq!(locate_section(text, SKILL_HEADERS).unwrap(), "Languages: Java");
    }

    #[test]
    fn lines_with_digits_never_bound_a_section() {
        let text = "SKILLS\nLanguages: Java\nIBM 2019\nTools: Git\nEDUCATION";
        let body = locate_section(text, SKILL_HEADERS).unwrap();
        assert_eq!(body, "Languages: Java\nIBM 2019\nTools: Git");
    }

    #[test]
    fn first_header_occurrence_wins() {
        let text = "SKILLS\nLanguages: Java\nEDUCATION\nx\nSKILLS\nTools: Git";
        assert_eq!(locate_section(text, SKILL_HEADERS).unwrap(), "Languages: Java");
    }

    #[test]
    fn missing_header_is_none() {
        assert_eq!(locate_section("just prose", SKILL_HEADERS), None);
    }
}
