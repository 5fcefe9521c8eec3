//! Catalog element tree — the externally-owned tree the search overlay
//! visits and annotates.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. The tree shape is
//! static: search mutates only the transient `visible`/`matched` flags and
//! the highlight runs inside text nodes, never the structure. The one
//! structural mutation in the whole system is the overlay inserting a
//! synthesized no-results banner at attach time.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Identifiers and roles
// ---------------------------------------------------------------------------

/// Addresses a node in the catalog arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The four fixed tiers of the controls hierarchy, root to leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    MainDomain,
    SubDomain,
    Control,
    SubControl,
}

impl Level {
    /// All levels in root-to-leaf order.
    pub const ALL: [Level; 4] = [
        Level::MainDomain,
        Level::SubDomain,
        Level::Control,
        Level::SubControl,
    ];
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::MainDomain => write!(f, "main-domain"),
            Level::SubDomain => write!(f, "subdomain"),
            Level::Control => write!(f, "control"),
            Level::SubControl => write!(f, "subcontrol"),
        }
    }
}

/// Role of an element node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A navigational element at one of the four tiers.
    Tier(Level),
    /// Generic structural wrapper with no search semantics.
    Section,
    /// Embedded script block; excluded from text aggregation and highlighting.
    Script,
    /// Embedded style block; excluded.
    Style,
    /// An input control (including the search field itself); excluded.
    Input,
    /// The wrapper around the search field; excluded.
    SearchContainer,
}

impl Role {
    /// Subtrees under these roles contribute no text to matching and are
    /// never highlighted.
    pub fn excluded(self) -> bool {
        matches!(
            self,
            Role::Script | Role::Style | Role::Input | Role::SearchContainer
        )
    }
}

// ---------------------------------------------------------------------------
// Node payloads
// ---------------------------------------------------------------------------

/// A contiguous piece of a text node with a single highlight state.
///
/// An unhighlighted text node is exactly one unmarked run. Highlighting
/// replaces the runs with an alternating split; clearing merges them back,
/// so repeated cycles never accumulate structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub marked: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Run { text: text.into(), marked: false }
    }

    pub fn marked(text: impl Into<String>) -> Self {
        Run { text: text.into(), marked: true }
    }
}

#[derive(Debug, Clone)]
pub struct ElementData {
    pub role: Role,
    /// Lookup id, carried by the search input and the no-results banner.
    pub id: Option<String>,
    /// Shown/hidden, recomputed every search cycle.
    pub visible: bool,
    /// True when this node's own text matched at its priority level.
    pub matched: bool,
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Element(ElementData),
    Text(Vec<Run>),
}

#[derive(Debug, Clone)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Arena-backed element tree with a single root section.
#[derive(Debug, Clone)]
pub struct Catalog {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        let root = NodeData {
            parent: None,
            children: Vec::new(),
            kind: NodeKind::Element(ElementData {
                role: Role::Section,
                id: None,
                visible: true,
                matched: false,
            }),
        };
        Catalog { nodes: vec![root], root: NodeId(0) }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    // ── Construction ───────────────────────────────────────────────────────

    fn push(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData { parent, children: Vec::new(), kind });
        id
    }

    /// Append a new element as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, role: Role) -> NodeId {
        let id = self.push(
            Some(parent),
            NodeKind::Element(ElementData { role, id: None, visible: true, matched: false }),
        );
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append a new element carrying a lookup id.
    pub fn append_element_with_id(
        &mut self,
        parent: NodeId,
        role: Role,
        element_id: &str,
    ) -> NodeId {
        let id = self.append_element(parent, role);
        if let NodeKind::Element(el) = &mut self.nodes[id.0].kind {
            el.id = Some(element_id.to_string());
        }
        id
    }

    /// Append a text node holding a single unmarked run.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = self.push(Some(parent), NodeKind::Text(vec![Run::plain(text)]));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Insert a new element as the sibling immediately after `anchor`.
    ///
    /// Falls back to appending to the root when `anchor` has no parent.
    pub fn insert_element_after(
        &mut self,
        anchor: NodeId,
        role: Role,
        element_id: &str,
    ) -> NodeId {
        let Some(parent) = self.nodes[anchor.0].parent else {
            return self.append_element_with_id(self.root, role, element_id);
        };
        let id = self.push(
            Some(parent),
            NodeKind::Element(ElementData {
                role,
                id: Some(element_id.to_string()),
                visible: true,
                matched: false,
            }),
        );
        let siblings = &mut self.nodes[parent.0].children;
        let pos = siblings
            .iter()
            .position(|&c| c == anchor)
            .map(|p| p + 1)
            .unwrap_or(siblings.len());
        siblings.insert(pos, id);
        id
    }

    // ── Structure queries ──────────────────────────────────────────────────

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::Text(_) => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.nodes[id.0].kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::Text(_) => None,
        }
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0].kind, NodeKind::Text(_))
    }

    /// The highlight runs of a text node, `None` for elements.
    pub fn runs(&self, id: NodeId) -> Option<&[Run]> {
        match &self.nodes[id.0].kind {
            NodeKind::Text(runs) => Some(runs),
            NodeKind::Element(_) => None,
        }
    }

    /// Replace the runs of a text node. No-op for elements.
    pub fn set_runs(&mut self, id: NodeId, runs: Vec<Run>) {
        if let NodeKind::Text(r) = &mut self.nodes[id.0].kind {
            *r = runs;
        }
    }

    /// First element in document order carrying the given lookup id.
    pub fn by_id(&self, element_id: &str) -> Option<NodeId> {
        self.preorder(self.root)
            .into_iter()
            .find(|&n| self.element(n).and_then(|el| el.id.as_deref()) == Some(element_id))
    }

    /// Every element with the given role, in document order.
    pub fn nodes_with_role(&self, role: Role) -> Vec<NodeId> {
        self.preorder(self.root)
            .into_iter()
            .filter(|&n| self.element(n).map(|el| el.role) == Some(role))
            .collect()
    }

    /// Every tier element at `level`, in document order.
    pub fn tier_nodes(&self, level: Level) -> Vec<NodeId> {
        self.nodes_with_role(Role::Tier(level))
    }

    /// Tier elements at `level` within the subtree rooted at `id`
    /// (excluding `id` itself), in document order.
    pub fn tiers_under(&self, id: NodeId, level: Level) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|&n| self.element(n).map(|el| el.role) == Some(Role::Tier(level)))
            .collect()
    }

    /// Nearest ancestor-or-self tier element at `level`.
    ///
    /// Returns `None` when the catalog is malformed and the expected
    /// ancestor level is absent; callers skip the reveal for that level.
    pub fn closest(&self, id: NodeId, level: Level) -> Option<NodeId> {
        let mut cur = Some(id);
        while let Some(n) = cur {
            if self.element(n).map(|el| el.role) == Some(Role::Tier(level)) {
                return Some(n);
            }
            cur = self.nodes[n.0].parent;
        }
        None
    }

    /// Preorder walk of the subtree rooted at `id`, including `id`.
    pub fn preorder(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            out.push(n);
            for &c in self.nodes[n.0].children.iter().rev() {
                stack.push(c);
            }
        }
        out
    }

    /// Preorder walk of the subtree rooted at `id`, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = self.preorder(id);
        out.remove(0);
        out
    }

    // ── Text ───────────────────────────────────────────────────────────────

    /// Concatenation of all descendant text, skipping subtrees rooted at
    /// excluded roles (script, style, input, search container).
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].kind {
            NodeKind::Text(runs) => {
                for run in runs {
                    out.push_str(&run.text);
                }
            }
            NodeKind::Element(el) => {
                if el.role.excluded() {
                    return;
                }
                for &c in &self.nodes[id.0].children {
                    self.collect_text(c, out);
                }
            }
        }
    }

    // ── Transient flags ────────────────────────────────────────────────────

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.element(id).map(|el| el.visible).unwrap_or(true)
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(el) = self.element_mut(id) {
            el.visible = visible;
        }
    }

    pub fn is_matched(&self, id: NodeId) -> bool {
        self.element(id).map(|el| el.matched).unwrap_or(false)
    }

    pub fn set_matched(&mut self, id: NodeId, matched: bool) {
        if let Some(el) = self.element_mut(id) {
            el.matched = matched;
        }
    }

    // ── Search scaffold ────────────────────────────────────────────────────

    /// Prepend the search container + input pair the overlay attaches to.
    ///
    /// Mirrors the host page's pre-rendered search box; returns the input's
    /// node id.
    pub fn append_search_scaffold(&mut self, input_id: &str) -> NodeId {
        let container = self.append_element(self.root, Role::SearchContainer);
        self.append_element_with_id(container, Role::Input, input_id)
    }
}

// ---------------------------------------------------------------------------
// Catalog spec (JSON form)
// ---------------------------------------------------------------------------

/// Serde form of a catalog document: domains → subdomains → controls →
/// subcontrols. Controls may also sit directly under a domain.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSpec {
    pub domains: Vec<DomainSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DomainSpec {
    pub name: String,
    #[serde(default)]
    pub subdomains: Vec<SubdomainSpec>,
    #[serde(default)]
    pub controls: Vec<ControlSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubdomainSpec {
    pub name: String,
    #[serde(default)]
    pub controls: Vec<ControlSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ControlSpec {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subcontrols: Vec<SubcontrolSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubcontrolSpec {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CatalogSpec {
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }
}

impl Catalog {
    /// Build the element tree for a catalog spec. Each tier element gets its
    /// name (and description, where present) as text children.
    pub fn from_spec(spec: &CatalogSpec) -> Self {
        let mut catalog = Catalog::new();
        let root = catalog.root();

        for domain in &spec.domains {
            let d = catalog.append_element(root, Role::Tier(Level::MainDomain));
            catalog.append_text(d, &domain.name);
            for sub in &domain.subdomains {
                let s = catalog.append_element(d, Role::Tier(Level::SubDomain));
                catalog.append_text(s, &sub.name);
                for control in &sub.controls {
                    catalog.append_control(s, control);
                }
            }
            for control in &domain.controls {
                catalog.append_control(d, control);
            }
        }
        catalog
    }

    fn append_control(&mut self, parent: NodeId, control: &ControlSpec) {
        let c = self.append_element(parent, Role::Tier(Level::Control));
        self.append_text(c, &control.name);
        if let Some(desc) = &control.description {
            self.append_text(c, desc);
        }
        for sub in &control.subcontrols {
            let sc = self.append_element(c, Role::Tier(Level::SubControl));
            self.append_text(sc, &sub.name);
            if let Some(desc) = &sub.description {
                self.append_text(sc, desc);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
