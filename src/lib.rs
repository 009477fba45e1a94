//! Heuristic extraction of structured records from plain-text resumes.
//!
//! Resume text has no fixed grammar: section headers vary in wording and
//! case, entries may or may not carry a role line, and education blocks
//! spread their information across one or two lines in several layouts.
//! This crate recovers a [`ResumeRecord`] from such text with pattern
//! matchers and line-oriented state machines alone — no parsing grammar,
//! no schema, no model. Decisions are made from a line and one line of
//! lookahead, without backtracking.
//!
//! The engine is a pure function of its input: no I/O, no shared state,
//! no cross-call caching. A field without matching evidence is `None`,
//! never an error; partial records are the expected outcome for many
//! layouts.
//!
//! ```
//! use resume_extract::extract_resume;
//!
//! let record = extract_resume("John Doe\nEmail: john@example.com\n");
//! assert_eq!(record.name.as_deref(), Some("John Doe"));
//! assert_eq!(record.email.as_deref(), Some("john@example.com"));
//! assert!(record.skills.is_none());
//! ```
//!
//! Document decoding (PDF/DOCX to text) is a caller concern; the input
//! contract is a single UTF-8 blob with `\n` line separators.

pub mod contact;
pub mod education;
pub mod experience;
pub mod record;
pub mod section;
pub mod skills;

mod extract;

pub use extract::extract_resume;
pub use record::{EduEntry, ResumeRecord, WorkEntry};
