//! Universal properties of the extraction heuristics.

use proptest::prelude::*;
use resume_extract::{contact, extract_resume, skills};

proptest! {
    // Whatever form the source wrote the profile in, the result is always
    // canonical.
    #[test]
    fn linkedin_result_is_always_canonical(
        handle in "[A-Za-z0-9_-]{1,16}",
        prefix in prop::sample::select(vec![
            "https://www.linkedin.com/",
            "http://linkedin.com/",
            "www.linkedin.com/",
            "linkedin.com/",
            "",
        ]),
    ) {
        let text = format!("Profile: {prefix}in/{handle} and some trailing prose");
        let url = contact::extract_linkedin(&text).unwrap();
        prop_assert!(url.starts_with("https://www.linkedin.com/"));
        prop_assert_eq!(url, format!("https://www.linkedin.com/in/{handle}"));
    }

    #[test]
    fn linkedin_never_matches_linkless_text(text in "[ a-hj-z.,]{0,64}") {
        // No "i", so no "in/<handle>" token can occur.
        prop_assert_eq!(contact::extract_linkedin(&text), None);
    }

    #[test]
    fn skills_are_unique_and_first_seen_ordered(
        tokens in prop::collection::vec("[A-Za-z+#]{1,8}", 1..12),
    ) {
        let body = format!("Languages: {}", tokens.join(", "));
        let parsed = skills::parse_skills(&body).unwrap();

        let mut expected: Vec<String> = Vec::new();
        for t in &tokens {
            if !expected.contains(t) {
                expected.push(t.clone());
            }
        }
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn pipeline_never_panics_and_is_pure(text in "\\PC{0,256}") {
        let first = extract_resume(&text);
        let second = extract_resume(&text);
        prop_assert_eq!(first, second);
    }
}
