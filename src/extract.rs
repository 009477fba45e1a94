//! Whole-document assembly.
//!
//! Pure composition of the section locator, the per-section parsers and
//! the contact matchers. Every call is a stateless function of the input
//! text; documents can be parsed concurrently with no coordination.

use crate::contact;
use crate::education::parse_education;
use crate::experience::parse_work_experience;
use crate::record::ResumeRecord;
use crate::section::locate_section;
use crate::skills::parse_skills;
use tracing::debug;

const SUMMARY_HEADERS: &[&str] = &["summary", "about me", "about", "professional summary"];

const SKILLS_HEADERS: &[&str] = &[
    "key competencies / technical skills",
    "technical skills",
    "key competencies",
    "skills",
    "core competencies",
];

const EXPERIENCE_HEADERS: &[&str] = &[
    "work experience",
    "professional experience",
    "experience",
    "employment history",
];

const EDUCATION_HEADERS: &[&str] = &["education", "academic background"];

/// The first non-blank line of the document, trimmed. A positional
/// heuristic only: nothing guarantees the line is actually a name.
fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

fn extract_summary(text: &str) -> Option<String> {
    let body = locate_section(text, SUMMARY_HEADERS)?;
    let summary = body.trim();
    if summary.is_empty() {
        None
    } else {
        Some(summary.to_string())
    }
}

/// Runs the full extraction pipeline over one resume's plain text.
///
/// Any field without matching evidence comes back `None`; partial results
/// are normal operation, not a failure, and no input panics the engine.
pub fn extract_resume(text: &str) -> ResumeRecord {
    let record = ResumeRecord {
        name: extract_name(text),
        email: contact::extract_email(text),
        phone: contact::extract_phone(text),
        linkedin: contact::extract_linkedin(text),
        summary: extract_summary(text),
        skills: locate_section(text, SKILLS_HEADERS).and_then(|body| parse_skills(&body)),
        work_experience: locate_section(text, EXPERIENCE_HEADERS)
            .and_then(|body| parse_work_experience(&body)),
        education: locate_section(text, EDUCATION_HEADERS)
            .and_then(|body| parse_education(&body)),
        certifications: None,
        languages: None,
        projects: None,
        address: None,
        urls: contact::extract_urls(text),
    };
    debug!(
        name = record.name.as_deref().unwrap_or("<none>"),
        has_email = record.email.is_some(),
        work_entries = record.work_experience.as_ref().map_or(0, Vec::len),
        "resume extracted"
    );
    record
}
