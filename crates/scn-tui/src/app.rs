//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Every edit to the search
//! bar re-runs one overlay search cycle against the catalog, so the tree
//! pane always shows the filtered view for the current query.

use crate::{
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        catalog_tree::{self, CatalogTree, CatalogTreeState},
        search_bar::{SearchBar, SearchBarState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use scn_core::{config::Config, Catalog, SearchOverlay};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tree,
    Search,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub catalog: Catalog,
    /// `None` when the search input element was missing at startup; the
    /// filter feature stays inert but the catalog still renders.
    pub overlay: Option<SearchOverlay>,
    pub tree: CatalogTreeState,
    pub search: SearchBarState,
    pub focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(mut catalog: Catalog, config: Config, theme: Theme) -> Self {
        let overlay = match SearchOverlay::attach(&mut catalog, &config.search) {
            Ok(overlay) => Some(overlay),
            Err(err) => {
                tracing::warn!(%err, "search overlay disabled");
                None
            }
        };

        let state = AppState {
            catalog,
            overlay,
            tree: CatalogTreeState::default(),
            search: SearchBarState::default(),
            focus: Focus::Tree,
            theme,
            config,
            quit: false,
        };

        App { state }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping while the search bar is focused
                        let app_event = if self.state.focus == Focus::Search {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::SearchFocus => {
                tracing::debug!("focus -> Search");
                s.focus = Focus::Search;
            }

            // Escape and Enter both return focus to the tree; the query (and
            // the filtered view) stays as typed.
            AppEvent::Escape | AppEvent::Enter => {
                if s.focus == Focus::Search {
                    tracing::debug!("focus: Search -> Tree");
                    s.focus = Focus::Tree;
                }
            }

            AppEvent::FocusNext => {
                s.focus = match s.focus {
                    Focus::Tree => Focus::Search,
                    Focus::Search => Focus::Tree,
                };
                tracing::debug!(to = ?s.focus, "focus cycle");
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => match s.focus {
                Focus::Tree => {
                    let lines =
                        catalog_tree::visible_lines(&s.catalog, s.config.ui.show_descriptions);
                    s.tree.handle(&other, lines.len());
                }
                Focus::Search => {
                    if s.search.handle(&other) {
                        run_search(s);
                    }
                }
            },
        }
    }
}

/// Re-run the overlay search for the current query and record the outcome.
fn run_search(s: &mut AppState) {
    let Some(overlay) = s.overlay else { return };
    let outcome = overlay.on_input(&mut s.catalog, &s.search.query);
    s.search.outcome = Some(outcome);
    let lines = catalog_tree::visible_lines(&s.catalog, s.config.ui.show_descriptions);
    s.tree.clamp(lines.len());
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let banner_visible = state
        .overlay
        .map(|o| state.catalog.is_visible(o.banner()))
        .unwrap_or(false);

    // Vertical: 3-line search bar | optional 1-line banner | catalog tree
    let constraints: Vec<Constraint> = if banner_visible {
        vec![Constraint::Length(3), Constraint::Length(1), Constraint::Fill(1)]
    } else {
        vec![Constraint::Length(3), Constraint::Fill(1)]
    };
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints(constraints)
        .split(area);

    frame.render_widget(
        SearchBar::new(&state.search, state.focus == Focus::Search, &state.theme),
        vert[0],
    );

    let tree_area = if banner_visible {
        if let Some(overlay) = state.overlay {
            let msg = state.catalog.text_content(overlay.banner());
            let line = Line::from(Span::styled(msg, state.theme.search_banner));
            frame.render_widget(Paragraph::new(line), vert[1]);
        }
        vert[2]
    } else {
        vert[1]
    };

    frame.render_widget(
        CatalogTree::new(
            &state.catalog,
            &state.tree,
            state.focus == Focus::Tree,
            &state.theme,
            &state.config.ui,
        ),
        tree_area,
    );

    // Position the terminal cursor when the search bar is focused
    if state.focus == Focus::Search {
        frame.set_cursor_position(state.search.cursor_position(vert[0]));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
