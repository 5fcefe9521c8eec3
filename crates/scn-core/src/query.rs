//! Search query — trimmed, case-insensitive, literal-substring matcher.
//!
//! The raw input is trimmed once here; the matcher is compiled once per
//! query and reused across every node test in the cycle. Metacharacters in
//! the query are always literal: `"a.b+c"` matches only the substring
//! `"a.b+c"`.

use regex::{Regex, RegexBuilder};

/// One search cycle's query. Replaced wholesale on every input event.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    raw: String,
    matcher: Option<Regex>,
}

impl SearchQuery {
    /// Build a query from raw input. Surrounding whitespace is trimmed; an
    /// input that trims to nothing produces the inert (empty) query.
    pub fn new(input: &str) -> Self {
        let raw = input.trim().to_string();
        let matcher = if raw.is_empty() {
            None
        } else {
            Some(
                RegexBuilder::new(&regex::escape(&raw))
                    .case_insensitive(true)
                    .build()
                    .expect("escaped literal pattern always compiles"),
            )
        };
        SearchQuery { raw, matcher }
    }

    /// The trimmed query text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when the query trimmed to nothing; search is inert.
    pub fn is_empty(&self) -> bool {
        self.matcher.is_none()
    }

    /// True iff `text` contains the query as a substring under Unicode
    /// case-insensitive comparison. The empty query matches nothing.
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.as_ref().is_some_and(|m| m.is_match(text))
    }

    pub(crate) fn matcher(&self) -> Option<&Regex> {
        self.matcher.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
