//! Visibility passes — bottom-up filtering of the four-tier hierarchy.
//!
//! Every cycle recomputes visibility from scratch; nothing is incremental.
//! Subcontrol matches take precedence over control-level matches: a control
//! whose own text matches but which also has a matching subcontrol is
//! revealed through the subcontrol path only, and its aggregate text is not
//! independently highlighted.
//!
//! # Sibling subcontrols
//!
//! When a subcontrol matches, every other subcontrol under the same control
//! is force-hidden — including other subcontrols that also match. With the
//! passes running in document order, the last matching sibling ends up
//! visible. This matches the shipped behavior and is preserved deliberately,
//! pending product-owner confirmation. See DESIGN.md.

use crate::catalog::{Catalog, Level, NodeId};
use crate::highlight::apply_highlights;
use crate::query::SearchQuery;

/// Run the visibility passes for a non-empty query.
///
/// Expects the cycle reset to have happened already (highlights cleared,
/// every tier visible, matched flags down). Returns true when any control
/// or subcontrol matched.
pub fn run_passes(catalog: &mut Catalog, query: &SearchQuery) -> bool {
    // Controls and subcontrols start hidden; upper tiers are derived later.
    for level in [Level::Control, Level::SubControl] {
        for node in catalog.tier_nodes(level) {
            catalog.set_visible(node, false);
        }
    }

    let mut any_match = subcontrol_pass(catalog, query);
    any_match |= control_pass(catalog, query);
    subdomain_pass(catalog);
    main_domain_pass(catalog);
    any_match
}

/// Step 3: subcontrols match first and at the highest priority.
fn subcontrol_pass(catalog: &mut Catalog, query: &SearchQuery) -> bool {
    let mut any_match = false;
    for sub in catalog.tier_nodes(Level::SubControl) {
        let text = catalog.text_content(sub);
        if !query.matches(&text) {
            continue;
        }
        any_match = true;
        catalog.set_visible(sub, true);
        catalog.set_matched(sub, true);
        apply_highlights(catalog, sub, query);
        tracing::debug!(node = %sub, "filter: subcontrol matched");

        if let Some(control) = catalog.closest(sub, Level::Control) {
            catalog.set_visible(control, true);
            // Force-hide every sibling subcontrol, matching or not.
            for sibling in catalog.tiers_under(control, Level::SubControl) {
                if sibling != sub {
                    catalog.set_visible(sibling, false);
                    tracing::debug!(node = %sibling, "filter: sibling subcontrol hidden");
                }
            }
        }
        reveal_upper_tiers(catalog, sub);
    }
    any_match
}

/// Step 4: controls with no revealed subcontrol match on their full text.
fn control_pass(catalog: &mut Catalog, query: &SearchQuery) -> bool {
    let mut any_match = false;
    for control in catalog.tier_nodes(Level::Control) {
        let has_visible_sub = catalog
            .tiers_under(control, Level::SubControl)
            .iter()
            .any(|&s| catalog.is_visible(s));
        if has_visible_sub {
            continue;
        }
        let text = catalog.text_content(control);
        if !query.matches(&text) {
            continue;
        }
        any_match = true;
        catalog.set_visible(control, true);
        catalog.set_matched(control, true);
        apply_highlights(catalog, control, query);
        tracing::debug!(node = %control, "filter: control matched");
        reveal_upper_tiers(catalog, control);
    }
    any_match
}

/// Step 5: a subdomain is visible iff it has a visible descendant control.
fn subdomain_pass(catalog: &mut Catalog) {
    for sub in catalog.tier_nodes(Level::SubDomain) {
        let visible = catalog
            .tiers_under(sub, Level::Control)
            .iter()
            .any(|&c| catalog.is_visible(c));
        catalog.set_visible(sub, visible);
    }
}

/// Step 6: a main-domain is visible iff it has a visible subdomain or a
/// visible control, direct or nested.
fn main_domain_pass(catalog: &mut Catalog) {
    for main in catalog.tier_nodes(Level::MainDomain) {
        let visible = catalog
            .tiers_under(main, Level::SubDomain)
            .iter()
            .chain(catalog.tiers_under(main, Level::Control).iter())
            .any(|&n| catalog.is_visible(n));
        catalog.set_visible(main, visible);
    }
}

/// Reveal the closest subdomain and main-domain of a matched node. A
/// missing ancestor level (malformed catalog) skips that reveal only.
fn reveal_upper_tiers(catalog: &mut Catalog, node: NodeId) {
    if let Some(subdomain) = catalog.closest(node, Level::SubDomain) {
        catalog.set_visible(subdomain, true);
    }
    if let Some(main) = catalog.closest(node, Level::MainDomain) {
        catalog.set_visible(main, true);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
