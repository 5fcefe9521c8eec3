//! scn TUI — ratatui application shell over the catalog search overlay.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use scn_core::{Catalog, CatalogSpec};
use std::path::Path;

const DEMO_CATALOG: &str = include_str!("demo_catalog.json");

/// Start the TUI with the catalog at `path`, or the embedded demo catalog
/// when no path is given.
pub fn run(path: Option<&Path>) -> anyhow::Result<()> {
    let config = scn_core::config::Config::load()
        .unwrap_or_else(|_| scn_core::config::Config::defaults());
    let theme = theme::Theme::load_default();

    let spec = match path {
        Some(path) => {
            let src = std::fs::read_to_string(path)?;
            CatalogSpec::from_json(&src)?
        }
        None => CatalogSpec::from_json(DEMO_CATALOG)?,
    };

    let mut catalog = Catalog::from_spec(&spec);
    catalog.append_search_scaffold(&config.search.input_id);

    App::new(catalog, config, theme).run()
}
