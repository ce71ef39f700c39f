//! Header panel UI rendering
//!
//! Handles the top bar with file controls, the reading width control, and
//! the theme selector.

use eframe::egui;
use std::path::PathBuf;
use crate::app::AppState;
use crate::state::CONTENT_WIDTH_RANGE;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a document file to open
    OpenFileRequested(PathBuf),
    /// User clicked the sample document button
    OpenSampleRequested,
}

/// Renders the application header with file controls and the theme selector
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📄 Open Document").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Folio Documents", &["json", "br"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("✨ Sample Document").clicked() {
            interaction = Some(HeaderInteraction::OpenSampleRequested);
        }

        ui.separator();

        if let Some(doc) = state.document.document() {
            let title = doc.title.clone();
            ui.label(egui::RichText::new(title).strong());

            ui.separator();

            ui.label("Width:");
            ui.add(
                egui::DragValue::new(state.layout.content_width_mut())
                    .range(CONTENT_WIDTH_RANGE)
                    .speed(4.0)
                    .suffix(" pt"),
            );
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(
                            &mut current_theme,
                            theme_name.to_string(),
                            theme_name,
                        );
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(egui::Color32::RED, err);
    }

    interaction
}
