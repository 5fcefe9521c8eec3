//! HTML materializer — serializes the annotated tree as markup.
//!
//! This is the "materialize to rendering surface" half the in-memory tree
//! deliberately stays free of: hidden nodes become inline `display: none`,
//! marked runs become `<mark class="highlight">`, and every piece of text
//! is escaped so literal `<`, `>`, `&` and quotes in catalog content are
//! never emitted as structure.

use crate::catalog::{Catalog, Level, NodeId, Role};

/// Escape text for insertion into markup: `&`, `<`, `>`, `"`, `'`.
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Serialize the subtree rooted at `node` (inclusive).
pub fn render(catalog: &Catalog, node: NodeId) -> String {
    let mut out = String::new();
    render_node(catalog, node, &mut out);
    out
}

fn render_node(catalog: &Catalog, node: NodeId, out: &mut String) {
    let Some(el) = catalog.element(node) else {
        // Text node: one escaped span per run, marks wrapped.
        if let Some(runs) = catalog.runs(node) {
            for run in runs {
                if run.marked {
                    out.push_str("<mark class=\"highlight\">");
                    out.push_str(&escape_text(&run.text));
                    out.push_str("</mark>");
                } else {
                    out.push_str(&escape_text(&run.text));
                }
            }
        }
        return;
    };

    let (tag, class) = tag_and_class(el.role);
    out.push('<');
    out.push_str(tag);
    if let Some(class) = class {
        out.push_str(" class=\"");
        out.push_str(class);
        out.push('"');
    }
    if let Some(id) = &el.id {
        out.push_str(" id=\"");
        out.push_str(&escape_text(id));
        out.push('"');
    }
    if !el.visible {
        out.push_str(" style=\"display: none\"");
    }

    if el.role == Role::Input {
        // Void element, no children rendered.
        out.push_str(" />");
        return;
    }
    out.push('>');
    for &child in catalog.children(node) {
        render_node(catalog, child, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn tag_and_class(role: Role) -> (&'static str, Option<&'static str>) {
    match role {
        Role::Tier(Level::MainDomain) => ("div", Some("main-domain")),
        Role::Tier(Level::SubDomain) => ("div", Some("subdomain")),
        Role::Tier(Level::Control) => ("div", Some("control")),
        Role::Tier(Level::SubControl) => ("div", Some("subcontrol")),
        Role::Section => ("div", None),
        Role::SearchContainer => ("div", Some("search-container")),
        Role::Script => ("script", None),
        Role::Style => ("style", None),
        Role::Input => ("input", None),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
