//! Text splitting — the pure half of the highlighter.
//!
//! [`segments`] splits a text into an ordered, alternating sequence of
//! non-matching and matching pieces. Original casing and whitespace are
//! preserved byte-for-byte: match positions come from the query's
//! case-insensitive matcher, the emitted text is always sliced from the
//! input. Concatenating the segments always reproduces the input exactly.

use crate::query::SearchQuery;

/// One piece of a split text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

/// Split `text` around every occurrence of `query`.
///
/// Segments are never empty; a text with no occurrence (or an empty query)
/// yields a single non-match segment, and an empty text yields no segments.
pub fn segments<'a>(text: &'a str, query: &SearchQuery) -> Vec<Segment<'a>> {
    if text.is_empty() {
        return Vec::new();
    }
    let Some(matcher) = query.matcher() else {
        return vec![Segment { text, is_match: false }];
    };

    let mut out = Vec::new();
    let mut last = 0;
    for m in matcher.find_iter(text) {
        if m.start() > last {
            out.push(Segment { text: &text[last..m.start()], is_match: false });
        }
        out.push(Segment { text: m.as_str(), is_match: true });
        last = m.end();
    }
    if last < text.len() {
        out.push(Segment { text: &text[last..], is_match: false });
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
