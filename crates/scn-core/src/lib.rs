//! scn-core — Security Controls Navigator core library.
//!
//! This crate holds the catalog element tree and the search overlay that
//! filters and highlights it. The overlay runs one synchronous cycle per
//! input notification; the rendering surface (TUI, HTML) only reads the
//! annotated tree afterwards.
//!
//! # Architecture
//!
//! ```text
//! input change ──► Overlay ──► Query ──► Filter passes ──► annotated Catalog
//!                     │                      │
//!                     └── clear ◄── Highlight┘
//! ```
//!
//! Everything is single-threaded and allocation-light: a cycle is one
//! bounded scan of the tree, no I/O, no timers.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod highlight;
pub mod html;
pub mod overlay;
pub mod query;
pub mod segments;

pub use catalog::{Catalog, CatalogSpec, Level, NodeId, Role, Run};
pub use overlay::{OverlayError, SearchOutcome, SearchOverlay};
pub use query::SearchQuery;
