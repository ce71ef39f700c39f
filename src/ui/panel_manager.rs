//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, progress indicator, selector bar,
//! content, status) plus the floating scroll-to-top control and keyboard
//! navigation, and funnels their interactions back to the application
//! coordinator.

use crate::app::AppState;
use crate::domain::scrolling;
use crate::io::AsyncLoader;
use crate::ui::{content_panel, header, progress_indicator, selector_bar, status_bar};
use crate::ui::input::{handle_keyboard_navigation, KeyboardNavResult};
use rfolio::{with_alpha, ThemeColors};

/// Result of panel interactions that need to be handled by the application
/// coordinator.
pub enum PanelInteraction {
    /// User requested to open a document file
    OpenFileRequested(std::path::PathBuf),
    /// User requested the built-in sample document
    OpenSampleRequested,
    /// A selector was activated (mouse click on the selector bar)
    SelectorActivated { selector_id: String },
    /// The scroll-to-top control was clicked
    ScrollToTopRequested,
    /// Arrow-key navigation moved the cursor right
    KeyboardAdvance,
    /// Arrow-key navigation moved the cursor left
    KeyboardRetreat,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = Self::current_theme_colors(state);

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenSampleRequested => {
                        PanelInteraction::OpenSampleRequested
                    }
                });
            }
        });

        // Reading progress strip directly under the header
        egui::TopBottomPanel::top("reading_progress")
            .exact_height(7.0)
            .show_separator_line(false)
            .show(ctx, |ui| {
                progress_indicator::render_progress_indicator(ui, state, &theme_colors);
            });

        // Selector bar above the content
        if state.document.document().is_some() {
            egui::TopBottomPanel::top("selector_bar").show(ctx, |ui| {
                if let Some(selector_bar::SelectorBarInteraction::SelectorClicked {
                    selector_id,
                }) = selector_bar::render_selector_bar(ui, state, &theme_colors)
                {
                    interaction = Some(PanelInteraction::SelectorActivated { selector_id });
                }
            });
        }

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Central panel: document content
        let content_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(content_frame)
            .show(ctx, |ui| {
                if loader.is_loading() {
                    ui.centered_and_justified(|ui| {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Loading document…");
                        });
                    });
                } else {
                    content_panel::render_content_panel(ui, ctx, state, &theme_colors);
                }
            });

        // Floating scroll-to-top control, visible past the scroll threshold
        if state.document.document().is_some()
            && scrolling::scroll_top_visible(state.scroll.offset())
        {
            egui::Area::new(egui::Id::new("scroll_to_top"))
                .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -48.0))
                .show(ctx, |ui| {
                    let button = egui::Button::new(
                        egui::RichText::new("⬆").size(18.0),
                    )
                    .fill(with_alpha(theme_colors.accent, 200))
                    .min_size(egui::vec2(36.0, 36.0));

                    if ui.add(button).on_hover_text("Back to top").clicked() {
                        interaction = Some(PanelInteraction::ScrollToTopRequested);
                    }
                });
        }

        // Arrow-key panel navigation
        match handle_keyboard_navigation(ctx) {
            KeyboardNavResult::Advance => {
                interaction = Some(PanelInteraction::KeyboardAdvance);
            }
            KeyboardNavResult::Retreat => {
                interaction = Some(PanelInteraction::KeyboardRetreat);
            }
            KeyboardNavResult::None => {}
        }

        interaction
    }

    /// Resolves the active theme palette, falling back to the manager's
    /// default when a stale preference names an unknown theme.
    fn current_theme_colors(state: &AppState) -> ThemeColors {
        let manager = state.theme.theme_manager();
        manager
            .get_theme(state.theme.current_theme_name())
            .unwrap_or_else(|| manager.current_theme())
            .colors
            .clone()
    }
}
