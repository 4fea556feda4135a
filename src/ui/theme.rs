use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// All available built-in theme names.
pub const BUILTIN_THEME_NAMES: &[&str] = &["default", "gruvbox", "nord"];

/// Data-driven theme: every color in one struct.
/// Constructed from built-in presets or loaded from TOML files.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ── Overlay text ─────────────────────────────────────────
    pub text: Color,
    pub text_dim: Color,

    // ── Controls ─────────────────────────────────────────────
    pub checkbox: Color,
    pub button: Color,
    pub slider_filled: Color,
    pub slider_track: Color,

    // ── Borders ──────────────────────────────────────────────
    pub border: Color,
    pub border_drag: Color,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────

    /// Default palette: the original overlay's chartreuse text and
    /// red checkboxes.
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            text: Color::Rgb(191, 255, 0),
            text_dim: Color::Rgb(110, 140, 40),
            checkbox: Color::Rgb(255, 60, 60),
            button: Color::Rgb(191, 255, 0),
            slider_filled: Color::Rgb(191, 255, 0),
            slider_track: Color::Rgb(70, 80, 50),
            border: Color::Rgb(90, 100, 60),
            border_drag: Color::Rgb(255, 255, 160),
        }
    }

    /// Gruvbox dark palette.
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            text: Color::Rgb(235, 219, 178),     // fg
            text_dim: Color::Rgb(168, 153, 132), // fg4
            checkbox: Color::Rgb(251, 73, 52),   // red
            button: Color::Rgb(250, 189, 47),    // yellow bright
            slider_filled: Color::Rgb(142, 192, 124), // green
            slider_track: Color::Rgb(60, 56, 54), // bg1
            border: Color::Rgb(80, 73, 69),      // bg2
            border_drag: Color::Rgb(215, 153, 33), // yellow
        }
    }

    /// Nord palette.
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            text: Color::Rgb(229, 233, 240),     // nord5
            text_dim: Color::Rgb(129, 161, 193), // nord9
            checkbox: Color::Rgb(191, 97, 106),  // nord11 red
            button: Color::Rgb(136, 192, 208),   // nord8 frost
            slider_filled: Color::Rgb(163, 190, 140), // nord14 green
            slider_track: Color::Rgb(67, 76, 94), // nord2
            border: Color::Rgb(76, 86, 106),     // nord3
            border_drag: Color::Rgb(235, 203, 139), // nord13 yellow
        }
    }

    /// Look up a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "gruvbox" => Some(Self::gruvbox()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }

    /// Cycle to the next built-in theme.
    pub fn next_builtin(&self) -> Self {
        let idx = BUILTIN_THEME_NAMES
            .iter()
            .position(|&n| n == self.name)
            .unwrap_or(0);
        let next_idx = (idx + 1) % BUILTIN_THEME_NAMES.len();
        Self::by_name(BUILTIN_THEME_NAMES[next_idx]).unwrap_or_default()
    }

    /// Load a custom theme from a TOML file, falling back to the default
    /// palette for missing fields.
    pub fn from_toml_file(path: &std::path::Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let file: ThemeFile = toml::from_str(&content).ok()?;
        Some(
            file.into_theme(
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("custom"),
            ),
        )
    }

    // ── Computed Styles ──────────────────────────────────────

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn checkbox_style(&self) -> Style {
        Style::default().fg(self.checkbox)
    }

    /// Style for a checkbox row whose category is disabled.
    pub fn checkbox_dim_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn button_style(&self) -> Style {
        Style::default()
            .fg(self.button)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style; highlighted while the card is being dragged
    /// (the terminal analog of the closed-hand cursor).
    pub fn border_style(&self, dragging: bool) -> Style {
        if dragging {
            Style::default().fg(self.border_drag)
        } else {
            Style::default().fg(self.border)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

// ── TOML deserialization for custom themes ──────────────────

/// Intermediate struct for parsing theme TOML files.
/// All fields are optional — missing fields inherit from the default theme.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ThemeFile {
    text: Option<String>,
    text_dim: Option<String>,
    checkbox: Option<String>,
    button: Option<String>,
    slider_filled: Option<String>,
    slider_track: Option<String>,
    border: Option<String>,
    border_drag: Option<String>,
}

impl ThemeFile {
    fn into_theme(self, name: &str) -> Theme {
        let base = Theme::default_theme();
        Theme {
            name: name.to_string(),
            text: parse_color(&self.text).unwrap_or(base.text),
            text_dim: parse_color(&self.text_dim).unwrap_or(base.text_dim),
            checkbox: parse_color(&self.checkbox).unwrap_or(base.checkbox),
            button: parse_color(&self.button).unwrap_or(base.button),
            slider_filled: parse_color(&self.slider_filled).unwrap_or(base.slider_filled),
            slider_track: parse_color(&self.slider_track).unwrap_or(base.slider_track),
            border: parse_color(&self.border).unwrap_or(base.border),
            border_drag: parse_color(&self.border_drag).unwrap_or(base.border_drag),
        }
    }
}

/// Parse a hex color string like "#BFFF00" or "BFFF00" into a ratatui Color.
fn parse_color(opt: &Option<String>) -> Option<Color> {
    let s = opt.as_ref()?;
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
