//! Domain-specific assertion macros for scn harnesses.
//!
//! These wrap plain panics with context-rich failure messages that make it
//! clear *which* node violated a visibility or highlight expectation.

use scn_core::{Catalog, NodeId};

// ---------------------------------------------------------------------------
// Visibility assertions
// ---------------------------------------------------------------------------

/// Assert that a tier node is visible after a search cycle.
///
/// ```rust
/// assert_visible!(catalog, node);
/// ```
#[macro_export]
macro_rules! assert_visible {
    ($catalog:expr, $node:expr) => {{
        let catalog: &scn_core::Catalog = &$catalog;
        let node: scn_core::NodeId = $node;
        if !catalog.is_visible(node) {
            panic!(
                "assert_visible! failed: node {} is hidden.\n  text: {:?}",
                node,
                catalog.text_content(node)
            );
        }
    }};
}

/// Assert that a tier node is hidden after a search cycle.
#[macro_export]
macro_rules! assert_hidden {
    ($catalog:expr, $node:expr) => {{
        let catalog: &scn_core::Catalog = &$catalog;
        let node: scn_core::NodeId = $node;
        if catalog.is_visible(node) {
            panic!(
                "assert_hidden! failed: node {} is visible.\n  text: {:?}",
                node,
                catalog.text_content(node)
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Highlight assertions
// ---------------------------------------------------------------------------

/// Assert that at least one text node under `node` carries a marked run.
#[macro_export]
macro_rules! assert_highlighted {
    ($catalog:expr, $node:expr) => {{
        let catalog: &scn_core::Catalog = &$catalog;
        let node: scn_core::NodeId = $node;
        if !$crate::common::has_marked_runs(catalog, node) {
            panic!(
                "assert_highlighted! failed: no marked runs under node {}.\n  text: {:?}",
                node,
                catalog.text_content(node)
            );
        }
    }};
}

/// Assert that no text node under `node` carries a marked run.
#[macro_export]
macro_rules! assert_no_marks {
    ($catalog:expr, $node:expr) => {{
        let catalog: &scn_core::Catalog = &$catalog;
        let node: scn_core::NodeId = $node;
        if $crate::common::has_marked_runs(catalog, node) {
            panic!(
                "assert_no_marks! failed: found marked runs under node {}.\n  text: {:?}",
                node,
                catalog.text_content(node)
            );
        }
    }};
}

/// True when any text node in the subtree (including `node`) has a marked run.
pub fn has_marked_runs(catalog: &Catalog, node: NodeId) -> bool {
    catalog
        .preorder(node)
        .into_iter()
        .filter_map(|n| catalog.runs(n))
        .any(|runs| runs.iter().any(|r| r.marked))
}

/// Every text node's runs in the subtree, concatenated per node. Useful for
/// asserting byte-identical restoration after a clear.
pub fn subtree_texts(catalog: &Catalog, node: NodeId) -> Vec<String> {
    catalog
        .preorder(node)
        .into_iter()
        .filter_map(|n| catalog.runs(n))
        .map(|runs| runs.iter().map(|r| r.text.as_str()).collect())
        .collect()
}

/// Run structure of every text node in the subtree — (text, marked) pairs.
/// Lets tests pin the exact alternating split a highlight pass produced.
pub fn subtree_runs(catalog: &Catalog, node: NodeId) -> Vec<Vec<(String, bool)>> {
    catalog
        .preorder(node)
        .into_iter()
        .filter_map(|n| catalog.runs(n))
        .map(|runs| runs.iter().map(|r| (r.text.clone(), r.marked)).collect())
        .collect()
}
