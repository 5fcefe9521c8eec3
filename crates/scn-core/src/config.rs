//! Configuration types for scn.
//!
//! [`Config::load`] reads `~/.config/scn/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
input_id          = "catalog-search"
banner_id         = "no-results"
not_found_message = "Search Term Not Found."

[ui]
show_descriptions = true
indent            = 2
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/scn/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[search]` section of `config.toml` — element ids the overlay binds to
/// and the no-results message it synthesizes.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_input_id")]
    pub input_id: String,
    #[serde(default = "default_banner_id")]
    pub banner_id: String,
    #[serde(default = "default_not_found_message")]
    pub not_found_message: String,
}

fn default_input_id() -> String { "catalog-search".to_string() }
fn default_banner_id() -> String { "no-results".to_string() }
fn default_not_found_message() -> String { "Search Term Not Found.".to_string() }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            input_id: default_input_id(),
            banner_id: default_banner_id(),
            not_found_message: default_not_found_message(),
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_show_descriptions")]
    pub show_descriptions: bool,
    #[serde(default = "default_indent")]
    pub indent: u16,
}

fn default_show_descriptions() -> bool { true }
fn default_indent() -> u16 { 2 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_descriptions: default_show_descriptions(),
            indent: default_indent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/scn/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("scn")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
