//! Catalog tree widget — the filtered controls hierarchy in the main pane.
//!
//! The widget renders whatever the search overlay left visible: a hidden
//! tier prunes its whole subtree (the same semantics as `display: none` on
//! an ancestor), and marked runs get the theme's highlight style.
//!
//! # Navigation
//! - `↑`/`k` and `↓`/`j` move the cursor up and down the visible lines.
//! - `PageUp`/`PageDown` (or `Ctrl+u`/`Ctrl+d`) move by a page.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};
use scn_core::config::UiConfig;
use scn_core::{Catalog, Level, NodeId, Role, Run};

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// Visible-line flattening
// ---------------------------------------------------------------------------

/// One render line of the catalog pane.
#[derive(Debug, Clone)]
pub struct TreeLine {
    pub level: Level,
    pub runs: Vec<Run>,
    /// True for the second and later text children of a tier (descriptions).
    pub is_description: bool,
}

/// Flatten the currently-visible tier elements into render lines, in
/// document order.
pub fn visible_lines(catalog: &Catalog, show_descriptions: bool) -> Vec<TreeLine> {
    let mut out = Vec::new();
    collect(catalog, catalog.root(), show_descriptions, &mut out);
    out
}

fn collect(catalog: &Catalog, node: NodeId, show_descriptions: bool, out: &mut Vec<TreeLine>) {
    let Some(el) = catalog.element(node) else { return };
    if el.role.excluded() {
        return;
    }
    if let Role::Tier(level) = el.role {
        if !el.visible {
            // A hidden ancestor hides the whole subtree.
            return;
        }
        let mut first = true;
        for &child in catalog.children(node) {
            let Some(runs) = catalog.runs(child) else { continue };
            if first {
                out.push(TreeLine { level, runs: runs.to_vec(), is_description: false });
                first = false;
            } else if show_descriptions {
                out.push(TreeLine { level, runs: runs.to_vec(), is_description: true });
            }
        }
        if first {
            out.push(TreeLine { level, runs: Vec::new(), is_description: false });
        }
    }
    for &child in catalog.children(node) {
        collect(catalog, child, show_descriptions, out);
    }
}

fn depth(level: Level) -> usize {
    match level {
        Level::MainDomain => 0,
        Level::SubDomain => 1,
        Level::Control => 2,
        Level::SubControl => 3,
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct CatalogTreeState {
    /// Index into the currently-visible line list.
    pub cursor: usize,
}

impl CatalogTreeState {
    /// Handle a navigation event. `line_count` is the number of lines the
    /// last render produced; the cursor is clamped against it.
    pub fn handle(&mut self, event: &AppEvent, line_count: usize) {
        let max = line_count.saturating_sub(1);
        match event {
            AppEvent::TreeNav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "tree: cursor up");
            }
            AppEvent::TreeNav(Direction::Down) => {
                if self.cursor < max {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "tree: cursor down");
            }
            AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(PAGE_STEP);
            }
            AppEvent::ScrollDown => {
                self.cursor = (self.cursor + PAGE_STEP).min(max);
            }
            _ => {}
        }
        self.clamp(line_count);
    }

    /// Pull the cursor back in range after the visible set shrank.
    pub fn clamp(&mut self, line_count: usize) {
        let max = line_count.saturating_sub(1);
        if self.cursor > max {
            self.cursor = max;
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct CatalogTree<'a> {
    catalog: &'a Catalog,
    state: &'a CatalogTreeState,
    focused: bool,
    theme: &'a Theme,
    ui: &'a UiConfig,
}

impl<'a> CatalogTree<'a> {
    pub fn new(
        catalog: &'a Catalog,
        state: &'a CatalogTreeState,
        focused: bool,
        theme: &'a Theme,
        ui: &'a UiConfig,
    ) -> Self {
        Self { catalog, state, focused, theme, ui }
    }
}

impl Widget for CatalogTree<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title("Controls Catalog")
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = visible_lines(self.catalog, self.ui.show_descriptions);

        let items: Vec<ListItem> = lines
            .iter()
            .map(|line| {
                let mut d = depth(line.level);
                if line.is_description {
                    d += 1;
                }
                let indent = " ".repeat(d * self.ui.indent as usize);
                let base = if line.is_description {
                    self.theme.description
                } else {
                    self.theme.tier_style(line.level)
                };
                let mut spans = vec![Span::raw(indent)];
                for run in &line.runs {
                    let style = if run.marked { self.theme.search_highlight } else { base };
                    spans.push(Span::styled(run.text.clone(), style));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list =
            List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
