//! Content panel UI rendering
//!
//! Renders the visible panel's text blocks and metric bars inside a
//! vertical scroll area, records the frame's scroll geometry for the
//! progress tracker, and drives in-flight animated scrolls.

use eframe::egui;
use crate::app::AppState;
use rfolio::{adjust_brightness, MetricBar, Panel, ThemeColors};

const BLOCK_SPACING: f32 = 10.0;
const BAR_HEIGHT: f32 = 14.0;

/// Seconds the rendering layer takes to ease a metric bar width change.
const BAR_TRANSITION_SECONDS: f32 = 0.6;

/// Renders the content area for the loaded document.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `ctx` - The egui context (for scroll state storage and animation)
/// * `state` - Mutable reference to application state
/// * `theme_colors` - Active theme palette
pub fn render_content_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) {
    let Some(doc) = state.document.document() else {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("No document loaded. Open a .folio.json file to start reading.")
                    .color(theme_colors.text_dim),
            );
        });
        return;
    };

    // Clone the render inputs up front so the scroll state below can borrow
    // the rest of AppState mutably.
    let title = doc.title.clone();
    let subtitle = doc.subtitle.clone();
    let visible_panel = state
        .panels
        .visible_panel_id()
        .and_then(|id| doc.panel(id))
        .cloned();

    let content_width = state.layout.content_width();
    let animator = state.animator;

    let output = egui::ScrollArea::vertical()
        .id_salt("document_content")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let column_width = content_width.min(ui.available_width());
            let margin = ((ui.available_width() - column_width) / 2.0).max(0.0);

            ui.horizontal(|ui| {
                ui.add_space(margin);
                ui.vertical(|ui| {
                    ui.set_max_width(column_width);
                    ui.add_space(12.0);

                    ui.heading(
                        egui::RichText::new(&title)
                            .size(26.0)
                            .color(theme_colors.text_strong),
                    );
                    if let Some(subtitle) = &subtitle {
                        ui.label(
                            egui::RichText::new(subtitle).color(theme_colors.text_dim),
                        );
                    }
                    ui.add_space(16.0);

                    match &visible_panel {
                        Some(panel) => render_panel(ui, ctx, panel, animator, theme_colors),
                        None => {
                            ui.label(
                                egui::RichText::new("No section selected")
                                    .color(theme_colors.text_dim),
                            );
                        }
                    }

                    ui.add_space(24.0);
                });
            });
        });

    // Record this frame's geometry for the progress tracker.
    state.scroll.record_frame(
        output.state.offset.y,
        output.content_size.y,
        output.inner_rect.height(),
    );

    // Advance any in-flight animated scroll and write the eased offset back.
    let dt = ctx.input(|i| i.stable_dt).min(0.1);
    if let Some(next_offset) = state.scroll.step_animation(dt) {
        let mut scroll_state = output.state;
        scroll_state.offset.y = next_offset;
        scroll_state.store(ctx, output.id);
        ctx.request_repaint();
    }
}

fn render_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    panel: &Panel,
    animator: crate::state::AnimatorState,
    theme_colors: &ThemeColors,
) {
    ui.heading(egui::RichText::new(&panel.label).color(theme_colors.text_strong));
    ui.add_space(8.0);

    for block in &panel.blocks {
        ui.label(egui::RichText::new(block).size(15.0));
        ui.add_space(BLOCK_SPACING);
    }

    if !panel.metrics.is_empty() {
        ui.add_space(6.0);
        ui.separator();
        ui.add_space(6.0);

        for (index, metric) in panel.metrics.iter().enumerate() {
            render_metric_bar(ui, ctx, &panel.id, index, metric, animator, theme_colors);
            ui.add_space(8.0);
        }
    }
}

/// Paints one metric bar: a track with a fill whose width eases toward the
/// percentage the animator currently reports (0 until the deferred restore
/// fires, the declared target afterwards).
fn render_metric_bar(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    panel_id: &str,
    index: usize,
    metric: &MetricBar,
    animator: crate::state::AnimatorState,
    theme_colors: &ThemeColors,
) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&metric.label).color(theme_colors.text_dim));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{:.0}%", metric.target_percent))
                    .color(theme_colors.text_dim),
            );
        });
    });

    let desired = egui::vec2(ui.available_width(), BAR_HEIGHT);
    let (rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());

    let shown_percent = animator.displayed_percent(metric.target_percent);
    let eased_percent = ctx.animate_value_with_time(
        egui::Id::new(("metric_bar", panel_id, index)),
        shown_percent,
        BAR_TRANSITION_SECONDS,
    );

    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, theme_colors.metric_track);

    let fill_width = rect.width() * (eased_percent / 100.0).clamp(0.0, 1.0);
    if fill_width > 0.0 {
        let fill_rect =
            egui::Rect::from_min_size(rect.min, egui::vec2(fill_width, rect.height()));
        painter.rect_filled(fill_rect, 4.0, theme_colors.metric_fill);
    }

    painter.rect_stroke(
        rect,
        4.0,
        egui::Stroke::new(1.0, adjust_brightness(theme_colors.metric_track, 0.85)),
        egui::StrokeKind::Outside,
    );
}
