//! Work-experience recovery as an explicit state machine.
//!
//! The section body is consumed line by line with a single line of
//! lookahead and no backtracking. An entry opens on a header line of the
//! shape `Company [Month] Year (to|-|–) (Present|Month Year|Year)`; the
//! line after a header is the role line unless it is itself a header; all
//! further lines accumulate as description until the next header.

use crate::record::WorkEntry;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

const MONTH: &str = "(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?\
|Jul(?:y)?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";

// The company capture is lazy so the date range is split off at the
// earliest point it can match; the duration is everything after it.
static ENTRY_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^([A-Z][A-Za-z0-9&.,'()/ ]*?)\s+(?:{MONTH}\s+)?\d{{4}}\s*(?:to|[-–])\s*(?:Present|[A-Za-z]+\s+\d{{4}}|\d{{4}})"
    ))
    .expect("valid entry header pattern")
});

enum State {
    /// Looking for the next entry header.
    Scanning,
    /// Just consumed a header; the next line may be the role line.
    RoleLine(WorkEntry),
    /// Accumulating description lines for the open entry.
    Description(WorkEntry),
}

/// Splits a header line into `(company, duration)`, or `None` if the line
/// is not an entry header. `duration` is the remainder of the line after
/// the company portion, so `company + " " + duration` reconstructs the
/// line up to whitespace normalization.
fn match_entry_header(line: &str) -> Option<(String, String)> {
    let caps = ENTRY_HEADER_RE.captures(line)?;
    let company = caps.get(1)?;
    let duration = line[company.end()..].trim();
    Some((company.as_str().trim().to_string(), duration.to_string()))
}

/// Recovers the ordered sequence of work entries from a section body, or
/// `None` if no entry header was recognized.
pub fn parse_work_experience(body: &str) -> Option<Vec<WorkEntry>> {
    let lines: Vec<&str> = body
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut entries: Vec<WorkEntry> = Vec::new();
    let mut state = State::Scanning;
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        state = match state {
            State::Scanning => {
                i += 1;
                match match_entry_header(line) {
                    Some((company, duration)) => State::RoleLine(WorkEntry {
                        company,
                        position: String::new(),
                        duration,
                        description: Vec::new(),
                    }),
                    None => State::Scanning,
                }
            }
            State::RoleLine(mut entry) => {
                if match_entry_header(line).is_some() {
                    // Back-to-back headers: the open entry has no role
                    // line. Do not consume; Scanning re-reads this line.
                    entries.push(entry);
                    State::Scanning
                } else {
                    entry.position = line.to_string();
                    i += 1;
                    State::Description(entry)
                }
            }
            State::Description(mut entry) => {
                if match_entry_header(line).is_some() {
                    entries.push(entry);
                    State::Scanning
                } else {
                    if let Some(rest) = line.strip_prefix(['-', '•']) {
                        entry.description.push(rest.trim_start_matches(['-', '•', ' ']).trim().to_string());
                    } else if !line.starts_with("Key Responsibility") {
                        entry.description.push(line.to_string());
                    }
                    i += 1;
                    State::Description(entry)
                }
            }
        };
    }
    match state {
        State::RoleLine(entry) | State::Description(entry) => entries.push(entry),
        State::Scanning => {}
    }

    if entries.is_empty() {
        return None;
    }
    debug!(count = entries.len(), "work entries parsed");
    Some(entries)
}
