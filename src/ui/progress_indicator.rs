//! Reading progress indicator rendering
//!
//! A thin bar under the header whose filled width tracks the reading
//! progress ratio, rewritten on every frame.

use eframe::egui;
use crate::app::AppState;
use rfolio::ThemeColors;

const INDICATOR_HEIGHT: f32 = 5.0;

/// Renders the progress indicator strip.
pub fn render_progress_indicator(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
) {
    let desired = egui::vec2(ui.available_width(), INDICATOR_HEIGHT);
    let (rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());

    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, theme_colors.metric_track);

    let fill_width = rect.width() * (state.scroll.progress() / 100.0).clamp(0.0, 1.0);
    if fill_width > 0.0 {
        let fill_rect =
            egui::Rect::from_min_size(rect.min, egui::vec2(fill_width, rect.height()));
        painter.rect_filled(fill_rect, 0.0, theme_colors.progress);
    }
}
