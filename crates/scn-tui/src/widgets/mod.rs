//! Widgets composing the scn screen: the catalog tree pane and the search bar.

pub mod catalog_tree;
pub mod search_bar;
