//! Search overlay — lifecycle and per-keystroke orchestration.
//!
//! [`SearchOverlay::attach`] binds to an existing catalog tree: it locates
//! the search input (required — without it the feature stays inert) and the
//! no-results banner (optional — synthesized next to the search container
//! when absent). [`SearchOverlay::on_input`] then runs one full synchronous
//! search cycle per input notification.

use thiserror::Error;

use crate::catalog::{Catalog, Level, NodeId, Role};
use crate::config::SearchConfig;
use crate::filter;
use crate::highlight::clear_highlights;
use crate::query::SearchQuery;

/// Why the overlay could not attach to the tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverlayError {
    /// The required search input element is missing; initialization aborts
    /// and no further action is taken.
    #[error("search input element not found (id = {0:?})")]
    SearchInputMissing(String),
}

/// Result of one search cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// True when the (non-empty) query matched at least one control or
    /// subcontrol.
    pub any_match: bool,
    /// True when the query trimmed to nothing: the search was cleared and
    /// every node is visible again.
    pub cleared: bool,
}

/// Attached search overlay. Holds the ids of the two elements it owns the
/// state of; the tree itself stays owned by the caller.
#[derive(Debug, Clone, Copy)]
pub struct SearchOverlay {
    input: NodeId,
    banner: NodeId,
}

impl SearchOverlay {
    /// Bind to `catalog`.
    ///
    /// The search input is looked up by `config.input_id` and is required.
    /// The banner is looked up by `config.banner_id`; when absent, a hidden
    /// banner carrying `config.not_found_message` is inserted immediately
    /// after the search container, or appended to the root when no search
    /// container exists either.
    pub fn attach(catalog: &mut Catalog, config: &SearchConfig) -> Result<Self, OverlayError> {
        let input = catalog
            .by_id(&config.input_id)
            .ok_or_else(|| OverlayError::SearchInputMissing(config.input_id.clone()))?;

        let banner = match catalog.by_id(&config.banner_id) {
            Some(existing) => existing,
            None => {
                let banner = match catalog.nodes_with_role(Role::SearchContainer).first() {
                    Some(&container) => {
                        catalog.insert_element_after(container, Role::Section, &config.banner_id)
                    }
                    None => {
                        let root = catalog.root();
                        catalog.append_element_with_id(root, Role::Section, &config.banner_id)
                    }
                };
                catalog.append_text(banner, &config.not_found_message);
                catalog.set_visible(banner, false);
                tracing::debug!(node = %banner, "overlay: no-results banner synthesized");
                banner
            }
        };

        Ok(SearchOverlay { input, banner })
    }

    pub fn input(&self) -> NodeId {
        self.input
    }

    pub fn banner(&self) -> NodeId {
        self.banner
    }

    /// Run one search cycle for the raw input text.
    ///
    /// The cycle always starts from a clean slate: highlights are cleared
    /// tree-wide, every tier is visible, matched flags are down, the banner
    /// is hidden. An empty (post-trim) query stops there; otherwise the
    /// visibility passes run and the banner reflects whether anything
    /// matched.
    pub fn on_input(&self, catalog: &mut Catalog, raw: &str) -> SearchOutcome {
        let query = SearchQuery::new(raw);

        let root = catalog.root();
        clear_highlights(catalog, root);
        catalog.set_visible(self.banner, false);
        for level in Level::ALL {
            for node in catalog.tier_nodes(level) {
                catalog.set_visible(node, true);
                catalog.set_matched(node, false);
            }
        }

        if query.is_empty() {
            tracing::debug!("overlay: search cleared");
            return SearchOutcome { any_match: false, cleared: true };
        }

        let any_match = filter::run_passes(catalog, &query);
        catalog.set_visible(self.banner, !any_match);
        tracing::debug!(query = query.as_str(), any_match, "overlay: cycle complete");
        SearchOutcome { any_match, cleared: false }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
