//! The structured record recovered from a resume, and its entry types.
//!
//! Every optional field is `None` when no evidence was found in the text,
//! never an empty default, so callers can tell "not found" apart from
//! "found empty". Serialization keeps absent fields as JSON `null`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One job held by the candidate, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub company: String,
    /// Empty string when the entry had no role line.
    pub position: String,
    /// The raw matched date-range text, e.g. "Jan 2019 - Present".
    pub duration: String,
    /// Description lines in the order they appear in the source.
    pub description: Vec<String>,
}

/// One education entry recovered from a degree line and, usually, the
/// institution/years line that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EduEntry {
    pub degree: String,
    pub university: String,
    /// Raw matched year range, or empty when unrecognized.
    pub years: String,
}

/// The assembled resume record.
///
/// `certifications`, `languages`, `projects` and `address` are passthrough
/// fields for callers that post-process the record; the extraction engine
/// never populates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResumeRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub summary: Option<String>,
    /// Deduplicated, first occurrence wins, source order preserved.
    pub skills: Option<Vec<String>>,
    pub work_experience: Option<Vec<WorkEntry>>,
    pub education: Option<Vec<EduEntry>>,
    pub certifications: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub projects: Option<Vec<String>>,
    pub address: Option<String>,
    /// All generic URLs found anywhere in the document. A sorted set keeps
    /// serialization deterministic; callers must not rely on the ordering.
    pub urls: Option<BTreeSet<String>>,
}
