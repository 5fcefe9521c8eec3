//! Test builders — ergonomic constructors for catalog trees and attached
//! overlays.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use scn_core::config::SearchConfig;
use scn_core::{Catalog, Level, NodeId, Role, SearchOverlay};

// ---------------------------------------------------------------------------
// CatalogBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for four-level catalog fixtures.
///
/// # Example
///
/// ```rust
/// let (catalog, overlay) = CatalogBuilder::new()
///     .domain("Infrastructure")
///     .subdomain("Cloud")
///     .control("Segmentation", Some("Split workloads into zones."))
///     .subcontrol("Networking")
///     .subcontrol("Storage")
///     .attach();
/// ```
pub struct CatalogBuilder {
    catalog: Catalog,
    current_domain: Option<NodeId>,
    current_subdomain: Option<NodeId>,
    current_control: Option<NodeId>,
}

impl CatalogBuilder {
    /// Start from an empty catalog carrying the search scaffold (container +
    /// input) the overlay attaches to.
    pub fn new() -> Self {
        let mut catalog = Catalog::new();
        catalog.append_search_scaffold(&SearchConfig::default().input_id);
        Self {
            catalog,
            current_domain: None,
            current_subdomain: None,
            current_control: None,
        }
    }

    /// Start from an empty catalog with no search scaffold at all.
    pub fn without_scaffold() -> Self {
        Self {
            catalog: Catalog::new(),
            current_domain: None,
            current_subdomain: None,
            current_control: None,
        }
    }

    /// Open a new main domain. Subsequent tiers nest under it.
    pub fn domain(mut self, name: &str) -> Self {
        let root = self.catalog.root();
        let d = self.catalog.append_element(root, Role::Tier(Level::MainDomain));
        self.catalog.append_text(d, name);
        self.current_domain = Some(d);
        self.current_subdomain = None;
        self.current_control = None;
        self
    }

    /// Open a new subdomain under the current domain.
    pub fn subdomain(mut self, name: &str) -> Self {
        let parent = self.current_domain.expect("subdomain requires a domain");
        let s = self.catalog.append_element(parent, Role::Tier(Level::SubDomain));
        self.catalog.append_text(s, name);
        self.current_subdomain = Some(s);
        self.current_control = None;
        self
    }

    /// Open a new control under the current subdomain (or directly under the
    /// current domain when no subdomain is open).
    pub fn control(mut self, name: &str, description: Option<&str>) -> Self {
        let parent = self
            .current_subdomain
            .or(self.current_domain)
            .expect("control requires a domain or subdomain");
        let c = self.catalog.append_element(parent, Role::Tier(Level::Control));
        self.catalog.append_text(c, name);
        if let Some(desc) = description {
            self.catalog.append_text(c, desc);
        }
        self.current_control = Some(c);
        self
    }

    /// Add a subcontrol under the current control.
    pub fn subcontrol(mut self, name: &str) -> Self {
        let parent = self.current_control.expect("subcontrol requires a control");
        let sc = self.catalog.append_element(parent, Role::Tier(Level::SubControl));
        self.catalog.append_text(sc, name);
        self
    }

    /// Finish building without attaching an overlay.
    pub fn build(self) -> Catalog {
        self.catalog
    }

    /// Finish building and attach the overlay with default config.
    pub fn attach(self) -> (Catalog, SearchOverlay) {
        let mut catalog = self.catalog;
        let overlay = SearchOverlay::attach(&mut catalog, &SearchConfig::default())
            .expect("builder catalogs carry the search scaffold");
        (catalog, overlay)
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Lookup helpers
// ---------------------------------------------------------------------------

/// Find the tier node at `level` whose first text child equals `title`.
/// Panics when absent — tests address nodes they know exist.
pub fn tier_by_title(catalog: &Catalog, level: Level, title: &str) -> NodeId {
    catalog
        .tier_nodes(level)
        .into_iter()
        .find(|&n| {
            catalog
                .children(n)
                .iter()
                .find_map(|&c| catalog.runs(c))
                .map(|runs| runs.iter().map(|r| r.text.as_str()).collect::<String>())
                .as_deref()
                == Some(title)
        })
        .unwrap_or_else(|| panic!("no {level} titled {title:?} in catalog"))
}

/// Concatenated text of a node's first text child — the tier's title line.
pub fn title_text(catalog: &Catalog, node: NodeId) -> String {
    catalog
        .children(node)
        .iter()
        .find_map(|&c| catalog.runs(c))
        .map(|runs| runs.iter().map(|r| r.text.as_str()).collect())
        .unwrap_or_default()
}
