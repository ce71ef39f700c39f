//! Theme support module for the Folio GUI
//!
//! This module provides the theming system for the document viewer. It
//! includes built-in reading themes (Light, Dark, Sepia, Dracula) and a
//! centralized theme manager.
//!
//! # Examples
//!
//! ```
//! use rfolio::theme::{ThemeManager, Theme};
//!
//! let manager = ThemeManager::new();
//! let sepia = manager.get_theme("Sepia").unwrap();
//! println!("Sepia background: {:?}", sepia.colors.background);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme, covering all viewer elements
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Viewer accents
    pub accent: Color32,
    pub progress: Color32,
    pub metric_fill: Color32,
    pub metric_track: Color32,

    // Feedback colors
    pub error: Color32,
    pub warning: Color32,
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Sepia".to_string(), sepia_theme());
        themes.insert("Dracula".to_string(), dracula_theme());

        Self {
            themes,
            current_theme_name: "Light".to_string(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme
    pub fn current_theme(&self) -> &Theme {
        self.themes.get(&self.current_theme_name).unwrap()
    }

    /// Sets the current theme by name
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        // Override background colors
        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        // Override text colors
        visuals.override_text_color = Some(colors.text);

        // Override selection
        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        // Override widget colors
        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        // Override hyperlink
        visuals.hyperlink_color = colors.accent;

        // Override error/warning colors
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme, the default for long-form reading
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light reading theme".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(250, 250, 249),
            panel_background: Color32::from_rgb(250, 250, 249),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(30, 30, 30),
            text_dim: Color32::from_rgb(120, 120, 120),
            text_strong: Color32::from_rgb(0, 0, 0),

            selection: Color32::from_rgb(190, 210, 250),
            hover: Color32::from_rgb(228, 228, 226),
            border: Color32::from_rgb(200, 200, 198),

            accent: Color32::from_rgb(40, 100, 200),
            progress: Color32::from_rgb(40, 100, 200),
            metric_fill: Color32::from_rgb(46, 160, 90),
            metric_track: Color32::from_rgb(225, 225, 223),

            error: Color32::from_rgb(200, 40, 40),
            warning: Color32::from_rgb(210, 130, 20),
        },
    }
}

/// Creates the Dark theme
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark reading theme".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(32, 33, 36),
            panel_background: Color32::from_rgb(32, 33, 36),
            extreme_background: Color32::from_rgb(18, 18, 20),

            text: Color32::from_rgb(222, 222, 222),
            text_dim: Color32::from_rgb(150, 150, 150),
            text_strong: Color32::from_rgb(255, 255, 255),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(58, 60, 65),
            border: Color32::from_rgb(95, 95, 100),

            accent: Color32::from_rgb(96, 165, 250),
            progress: Color32::from_rgb(96, 165, 250),
            metric_fill: Color32::from_rgb(52, 190, 110),
            metric_track: Color32::from_rgb(55, 57, 62),

            error: Color32::from_rgb(231, 76, 60),
            warning: Color32::from_rgb(243, 156, 18),
        },
    }
}

/// Creates the Sepia theme, a warm paper-like palette for long sessions
fn sepia_theme() -> Theme {
    Theme {
        name: "Sepia".to_string(),
        description: "Warm paper-like palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#f4ecd8"),
            panel_background: hex_to_color32("#f4ecd8"),
            extreme_background: hex_to_color32("#fbf5e6"),

            text: hex_to_color32("#433422"),
            text_dim: hex_to_color32("#8a7a60"),
            text_strong: hex_to_color32("#2b2013"),

            selection: hex_to_color32("#e0cfa8"),
            hover: hex_to_color32("#eadfc4"),
            border: hex_to_color32("#c9b890"),

            accent: hex_to_color32("#a0522d"),
            progress: hex_to_color32("#a0522d"),
            metric_fill: hex_to_color32("#7c9a4e"),
            metric_track: hex_to_color32("#e6dcc0"),

            error: hex_to_color32("#b03a2e"),
            warning: hex_to_color32("#b9770e"),
        },
    }
}

/// Creates the Dracula theme
///
/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula color palette".to_string(),
        colors: ThemeColors {
            // Background: #282a36
            background: hex_to_color32("#282a36"),
            panel_background: hex_to_color32("#282a36"),
            // Darker background for contrast: #21222c
            extreme_background: hex_to_color32("#21222c"),

            // Foreground: #f8f8f2
            text: hex_to_color32("#f8f8f2"),
            // Comment: #6272a4
            text_dim: hex_to_color32("#6272a4"),
            text_strong: hex_to_color32("#f8f8f2"),

            // Current Line: #44475a
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            accent: hex_to_color32("#bd93f9"),
            progress: hex_to_color32("#ff79c6"),
            metric_fill: hex_to_color32("#50fa7b"),
            metric_track: hex_to_color32("#44475a"),

            error: hex_to_color32("#ff5555"),
            warning: hex_to_color32("#ffb86c"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}
