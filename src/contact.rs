//! Contact-pattern matchers applied to the whole document text.
//!
//! Each matcher returns the first match for singular fields (email, phone,
//! LinkedIn) or the full deduplicated set for generic URLs. A miss is
//! `None`, never an error.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+").expect("valid email pattern"));

// At least 9 characters between the first and last digit, allowing interior
// spaces and hyphens and an optional leading +.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\s\-]{7,}\d").expect("valid phone pattern"));

// Full URLs, bare domain forms and bare relative "in/<handle>" forms. The
// handle path is captured so every variant canonicalizes the same way.
static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?linkedin\.com/(in/[\w\-]+)|\b(in/[\w\-]+)")
        .expect("valid linkedin pattern")
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https?://[\w./\-%#?=&]+|www\.[\w./\-%#?=&]+|github\.com/[\w\-]+|leetcode\.com/[\w\-]+|hackerrank\.com/[\w\-]+",
    )
    .expect("valid url pattern")
});

/// First email-shaped token in the text, verbatim.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First phone-shaped digit run in the text, verbatim (not normalized).
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// First LinkedIn profile reference, canonicalized to
/// `https://www.linkedin.com/in/<handle>` regardless of how the source
/// wrote it (full URL, bare domain, or bare `in/<handle>`).
pub fn extract_linkedin(text: &str) -> Option<String> {
    let caps = LINKEDIN_RE.captures(text)?;
    let path = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str())?
        .trim_start_matches('/');
    Some(format!("https://www.linkedin.com/{path}"))
}

/// All generic URLs in the document, deduplicated. Bare `www.` and known
/// developer-platform domains get an `https://` prefix. `None` when the
/// text contains no URL at all.
pub fn extract_urls(text: &str) -> Option<BTreeSet<String>> {
    let mut urls = BTreeSet::new();
    for m in URL_RE.find_iter(text) {
        let url = m.as_str();
        if url.starts_with("http") {
            urls.insert(url.to_string());
        } else {
            urls.insert(format!("https://{url}"));
        }
    }
    if urls.is_empty() {
        None
    } else {
        Some(urls)
    }
}
