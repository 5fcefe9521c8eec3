//! Highlighter — applies and removes highlight marks on text runs.
//!
//! A mark is purely visual: it never changes the tree shape or the text
//! itself, only how a text node's content is partitioned into [`Run`]s.
//! [`clear_highlights`] merges every text node back to a single unmarked
//! run, so the visible text is restored byte-for-byte and repeated search
//! cycles never accumulate structure.

use crate::catalog::{Catalog, NodeId, Run};
use crate::query::SearchQuery;
use crate::segments::segments;

/// Remove every highlight mark under `root` (inclusive), restoring each
/// text node to a single unmarked run. Safe to call when no highlights
/// exist.
pub fn clear_highlights(catalog: &mut Catalog, root: NodeId) {
    for node in catalog.preorder(root) {
        let Some(runs) = catalog.runs(node) else { continue };
        if runs.len() == 1 && !runs[0].marked {
            continue;
        }
        let merged: String = runs.iter().map(|r| r.text.as_str()).collect();
        catalog.set_runs(node, vec![Run::plain(merged)]);
    }
}

/// Wrap every occurrence of `query` in the text nodes under `node`
/// (inclusive) in a highlight mark.
///
/// Subtrees rooted at excluded roles (script, style, input, the search
/// container) are skipped entirely. Expects the cycle-wide
/// [`clear_highlights`] to have run already; each text node is split at
/// most once per cycle.
pub fn apply_highlights(catalog: &mut Catalog, node: NodeId, query: &SearchQuery) {
    if query.is_empty() {
        return;
    }
    if let Some(el) = catalog.element(node) {
        if el.role.excluded() {
            return;
        }
        for child in catalog.children(node).to_vec() {
            apply_highlights(catalog, child, query);
        }
        return;
    }

    // Text node: re-split only when the query occurs in it.
    let text: String = catalog
        .runs(node)
        .map(|runs| runs.iter().map(|r| r.text.as_str()).collect())
        .unwrap_or_default();
    if !query.matches(&text) {
        return;
    }
    let runs: Vec<Run> = segments(&text, query)
        .into_iter()
        .map(|s| Run { text: s.text.to_string(), marked: s.is_match })
        .collect();
    tracing::debug!(node = %node, marks = runs.iter().filter(|r| r.marked).count(), "highlight: text split");
    catalog.set_runs(node, runs);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
