//! Colour theme for the scn TUI.
//!
//! Themes are defined as TOML files. The default theme is embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::load_default`] at startup and pass the result through
//! the application as a shared reference.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use scn_core::Level;
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(ref s) = self.fg {
            if let Some(c) = parse_color(s) {
                style = style.fg(c);
            }
        }
        if let Some(ref s) = self.bg {
            if let Some(c) = parse_color(s) {
                style = style.bg(c);
            }
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawTiers {
    main_domain: RawStyle,
    subdomain: RawStyle,
    control: RawStyle,
    subcontrol: RawStyle,
    description: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
    banner: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    tiers: RawTiers,
    borders: RawBorders,
    search: RawSearch,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme.
///
/// Load once at startup with [`Theme::load_default`] and pass as a shared
/// reference throughout the TUI. All styles are pre-resolved ratatui [`Style`]
/// values — no allocation at render time.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Styles for each catalog tier.
    pub tier_main_domain: Style,
    pub tier_subdomain: Style,
    pub tier_control: Style,
    pub tier_subcontrol: Style,
    /// Style for control/subcontrol description lines.
    pub description: Style,

    /// Border style for the currently focused pane.
    pub border_focused: Style,
    /// Border style for unfocused panes.
    pub border_unfocused: Style,

    /// Inline highlight applied to matched search spans.
    pub search_highlight: Style,
    /// Style of the "no results" banner line.
    pub search_banner: Style,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed, which is caught by the
    /// `default_theme_loads` test rather than at runtime.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Parse a theme from a TOML string.
    ///
    /// Returns an error if the string cannot be deserialised into a valid
    /// theme. Unknown keys are ignored so user themes can be forward-compatible
    /// with future theme additions.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            tier_main_domain: raw.tiers.main_domain.into_style(),
            tier_subdomain: raw.tiers.subdomain.into_style(),
            tier_control: raw.tiers.control.into_style(),
            tier_subcontrol: raw.tiers.subcontrol.into_style(),
            description: raw.tiers.description.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            search_highlight: raw.search.highlight.into_style(),
            search_banner: raw.search.banner.into_style(),
        })
    }

    /// Return the [`Style`] for a catalog tier.
    pub fn tier_style(&self, level: Level) -> Style {
        match level {
            Level::MainDomain => self.tier_main_domain,
            Level::SubDomain => self.tier_subdomain,
            Level::Control => self.tier_control,
            Level::SubControl => self.tier_subcontrol,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
