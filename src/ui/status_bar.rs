//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying document metadata and the
//! current reading position.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::utils::{format_count, format_memory_mb, get_current_memory_mb};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        if let Some(doc) = state.document.document() {
            ui.label(RichText::new("|").strong());

            let panels = doc.panels.len();
            let words = format_count(doc.word_count());
            let metrics = doc.metric_count();

            if state.document.file_path().is_none() {
                ui.label(RichText::new(format!(
                    "Sample Document | Panels: {} | Words: {} | Metrics: {}",
                    panels, words, metrics
                )).strong());
            } else {
                let file = state
                    .document
                    .file_path()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "?".to_string());
                ui.label(RichText::new(format!(
                    "File: {} | Panels: {} | Words: {} | Metrics: {}",
                    file, panels, words, metrics
                )).strong());
            }

            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Read: {:.0}%", state.scroll.progress())).strong());
        } else {
            ui.label(RichText::new("| No document loaded").strong());
        }
    });
}
