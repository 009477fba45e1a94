//! Skill-token extraction from a skills section body.

use indexmap::IndexSet;
use tracing::debug;

/// Splits a skills section into discrete tokens.
///
/// Only lines with a category prefix contribute ("Languages: Java,
/// Python"); prose lines without a colon are ignored, trading recall for
/// precision. Tokens are trimmed, stripped of trailing periods,
/// deduplicated case-sensitively with first occurrence winning.
pub fn parse_skills(body: &str) -> Option<Vec<String>> {
    let mut skills: IndexSet<String> = IndexSet::new();
    for line in body.lines() {
        let Some((_, rest)) = line.split_once(':') else {
            continue;
        };
        for token in rest.split([',', ';']) {
            let skill = token.trim().trim_end_matches('.');
            if !skill.is_empty() {
                skills.insert(skill.to_string());
            }
        }
    }
    if skills.is_empty() {
        return None;
    }
    debug!(count = skills.len(), "skills parsed");
    Some(skills.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_comma_and_semicolon() {
        let body = "Languages: Java, Python; Go";
        assert_eq!(parse_skills(body).unwrap(), ["Java", "Python", "Go"]);
    }

    #[test]
    fn duplicates_keep_first_occurrence_order() {
        let body = "Languages: Java, Python, Java";
        assert_eq!(parse_skills(body).unwrap(), ["Java", "Python"]);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let body = "Languages: Java, java";
        assert_eq!(parse_skills(body).unwrap(), ["Java", "java"]);
    }

    #[test]
    fn trailing_periods_are_stripped() {
        let body = "Tools: Docker., Node.js.";
        assert_eq!(parse_skills(body).unwrap(), ["Docker", "Node.js"]);
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let body = "Seasoned generalist with many skills\nLanguages: Java";
        assert_eq!(parse_skills(body).unwrap(), ["Java"]);
    }

    #[test]
    fn multiple_category_lines_accumulate() {
        let body = "Languages: Java\nDatabases: MongoDB, Redis";
        assert_eq!(parse_skills(body).unwrap(), ["Java", "MongoDB", "Redis"]);
    }

    #[test]
    fn no_tokens_is_none() {
        assert_eq!(parse_skills("just prose, no categories"), None);
        assert_eq!(parse_skills("Empty:  , ;"), None);
        assert_eq!(parse_skills(""), None);
    }
}
