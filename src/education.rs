//! Education recovery via a paired-line heuristic.
//!
//! A line mentioning a degree keyword is paired with the line that follows
//! it, which is expected to carry the institution and years in one of a
//! few layouts. The parser never looks more than one line ahead.

use crate::record::EduEntry;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Bachelor|Master|B\.|M\.|PhD|Doctor").expect("valid degree pattern")
});

// "<institution>, <start> - <end>" where each bound is an optional month
// followed by a four-digit year.
static UNI_YEARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+), *((?:[A-Za-z]+ +)?\d{4} ?[-–] ?(?:[A-Za-z]+ +)?\d{4})$")
        .expect("valid institution/years pattern")
});

// "<institution>(<years>)"
static UNI_PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\((.+)\)").expect("valid parenthesized years pattern"));

/// Splits an institution/years line. Tried in priority order: comma-plus-
/// range, parenthesized years, then the whole line as the institution with
/// empty years.
fn split_institution_line(line: &str) -> (String, String) {
    if let Some(caps) = UNI_YEARS_RE.captures(line) {
        return (caps[1].trim().to_string(), caps[2].trim().to_string());
    }
    if let Some(caps) = UNI_PAREN_RE.captures(line) {
        return (caps[1].trim().to_string(), caps[2].trim().to_string());
    }
    (line.to_string(), String::new())
}

/// Recovers the ordered education entries from a section body, or `None`
/// if no degree line was recognized.
///
/// Each recognized degree line consumes itself and the following line; a
/// degree line at the very end of the section has no pair and yields no
/// entry.
pub fn parse_education(body: &str) -> Option<Vec<EduEntry>> {
    let lines: Vec<&str> = body
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut entries = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if DEGREE_RE.is_match(lines[i]) {
            if let Some(next) = lines.get(i + 1) {
                let (university, years) = split_institution_line(next);
                entries.push(EduEntry {
                    degree: lines[i].to_string(),
                    university,
                    years,
                });
                i += 2;
                continue;
            }
        }
        i += 1;
    }

    if entries.is_empty() {
        return None;
    }
    debug!(count = entries.len(), "education entries parsed");
    Some(entries)
}
