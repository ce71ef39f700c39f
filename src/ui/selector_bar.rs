//! Selector bar UI rendering
//!
//! The clickable row of selectors, one per content panel. Clicking a
//! selector runs the panel switch protocol; the highlighted selector mirrors
//! the visible panel (or the initial markup state before any switch).

use eframe::egui;
use crate::app::AppState;
use rfolio::ThemeColors;

/// Result of user interaction with the selector bar
pub enum SelectorBarInteraction {
    /// A selector was clicked
    SelectorClicked { selector_id: String },
}

/// Renders the selector row for the loaded document.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `theme_colors` - Active theme palette
pub fn render_selector_bar(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
) -> Option<SelectorBarInteraction> {
    let doc = state.document.document()?;
    let mut interaction = None;

    let highlighted = state.panels.highlighted_selector_id().map(str::to_string);

    ui.horizontal_wrapped(|ui| {
        for selector in doc.selectors() {
            let active = highlighted.as_deref() == Some(selector.id.as_str());

            let text = if active {
                egui::RichText::new(&selector.label)
                    .color(theme_colors.accent)
                    .strong()
            } else {
                egui::RichText::new(&selector.label)
            };

            if ui.selectable_label(active, text).clicked() {
                interaction = Some(SelectorBarInteraction::SelectorClicked {
                    selector_id: selector.id.clone(),
                });
            }
        }
    });

    interaction
}
