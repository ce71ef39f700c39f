//! Application-level coordination and workflow management.
//!
//! Handles high-level operations: document loading, panel switching,
//! keyboard navigation, scroll-to-top, and delivery of deferred effects.
//! Every handler is independent; a missing panel or an empty selector row
//! degrades silently without disturbing the others.

use crate::app::AppState;
use crate::app::effect_queue::{
    DeferredEffect, BAR_RESTORE_DELAY, SWITCH_SCROLL_DELAY,
};
use crate::domain::progress;
use crate::io::{AsyncLoader, LoadResult};
use std::path::PathBuf;
use std::time::Instant;
use rfolio::Document;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing document loading workflows
/// - Running the panel switch protocol
/// - Re-issuing selector activations for keyboard navigation
/// - Delivering due deferred effects
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous document loading.
    ///
    /// Immediately clears previous document state so the loading indicator
    /// shows.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_document_state();
        loader.start_file_load(path, ctx);
    }

    /// Checks for loading completion and applies results to application
    /// state.
    ///
    /// Called once per frame in the update loop. Returns true if a load
    /// operation completed (success or error).
    pub fn check_loading_completion(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        now: Instant,
    ) -> bool {
        match loader.check_completion() {
            LoadResult::Success { document, path } => {
                Self::install_document(state, document, path, now);
                true
            }
            LoadResult::Error(error_msg) => {
                state.error_message = Some(format!("Error loading document: {}", error_msg));
                state.document.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Generates and loads the built-in sample document.
    pub fn open_sample(state: &mut AppState, loader: &mut AsyncLoader, now: Instant) {
        match loader.load_sample() {
            Ok(document) => Self::install_document(state, document, None, now),
            Err(e) => {
                state.error_message = Some(format!("Error generating sample document: {}", e));
            }
        }
    }

    /// Installs a freshly loaded document: captures the selector row, resets
    /// the cursor and scroll position, and arms the one-shot bar animation
    /// (all bars zeroed now, one deferred restore for all of them together).
    fn install_document(
        state: &mut AppState,
        document: Document,
        path: Option<PathBuf>,
        now: Instant,
    ) {
        state.panels = crate::state::PanelState::from_document(&document);
        state.navigation.reset(state.panels.selector_count());
        state.scroll.reset();
        state.effects.clear();
        state.error_message = None;

        state.animator.arm();
        state
            .effects
            .schedule(DeferredEffect::RestoreMetricBars, BAR_RESTORE_DELAY, now);

        state.document.load(document, path);
    }

    /// Runs the panel switch protocol for an activated selector.
    ///
    /// Every panel and selector loses the active state and the initial
    /// markup overrides are cleared; the interacted selector gains the
    /// active state; if a panel matches the id it gains the active state
    /// and a deferred scroll brings its top into view. A missing panel id
    /// leaves the selector activated and silently skips the panel step.
    pub fn activate_selector(state: &mut AppState, selector_id: &str, now: Instant) {
        state.panels.clear_all_active();
        state.panels.set_selector_active(selector_id);

        let has_panel = state
            .document
            .document()
            .is_some_and(|doc| doc.panel(selector_id).is_some());

        if has_panel {
            state.panels.set_panel_active(selector_id);
            state.effects.schedule(
                DeferredEffect::ScrollPanelIntoView {
                    panel_id: selector_id.to_string(),
                },
                SWITCH_SCROLL_DELAY,
                now,
            );
        }
    }

    /// Advances the keyboard cursor rightward and activates the selector it
    /// lands on, re-entering the same switch path a click takes.
    pub fn navigate_right(state: &mut AppState, now: Instant) {
        if let Some(index) = state.navigation.advance() {
            Self::activate_cursor_selector(state, index, now);
        }
    }

    /// Moves the keyboard cursor leftward and activates the selector it
    /// lands on.
    pub fn navigate_left(state: &mut AppState, now: Instant) {
        if let Some(index) = state.navigation.retreat() {
            Self::activate_cursor_selector(state, index, now);
        }
    }

    fn activate_cursor_selector(state: &mut AppState, index: usize, now: Instant) {
        if let Some(id) = state.panels.selector_id_at(index).map(str::to_string) {
            Self::activate_selector(state, &id, now);
        }
    }

    /// Starts the animated scroll back to the top of the content area.
    pub fn scroll_to_top(state: &mut AppState) {
        state.scroll.start_animated_scroll(0.0);
    }

    /// Recomputes the reading progress ratio from the latest scroll
    /// geometry. Runs every frame, unthrottled.
    pub fn update_reading_progress(state: &mut AppState) {
        let ratio = progress::progress_ratio(
            state.scroll.offset(),
            state.scroll.content_height(),
            state.scroll.viewport_height(),
        );
        state.scroll.set_progress(ratio);
    }

    /// Delivers every due deferred effect in schedule order.
    ///
    /// Effects are fire-and-forget; overlapping deliveries apply in order
    /// with the last write winning.
    pub fn process_due_effects(state: &mut AppState, now: Instant) {
        for effect in state.effects.drain_due(now) {
            match effect {
                DeferredEffect::ScrollPanelIntoView { .. } => {
                    // The active panel occupies the content area from the
                    // top, so revealing it means easing the offset to 0.
                    state.scroll.start_animated_scroll(0.0);
                }
                DeferredEffect::RestoreMetricBars => {
                    state.animator.restore();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BarPhase;
    use std::time::Duration;
    use rfolio::parse_document;

    fn abc_document() -> Document {
        parse_document(
            r#"{
                "title": "T",
                "panels": [
                    {"id": "alpha", "label": "A", "initially_active": true,
                     "metrics": [{"label": "m1", "target_percent": 80.0}]},
                    {"id": "beta", "label": "B"},
                    {"id": "gamma", "label": "C",
                     "metrics": [{"label": "m2", "target_percent": 35.0}]}
                ]
            }"#,
        )
        .unwrap()
    }

    fn loaded_state(now: Instant) -> AppState {
        let mut state = AppState::new();
        ApplicationCoordinator::install_document(&mut state, abc_document(), None, now);
        state
    }

    #[test]
    fn test_two_right_arrows_activate_third_panel() {
        let now = Instant::now();
        let mut state = loaded_state(now);

        ApplicationCoordinator::navigate_right(&mut state, now);
        ApplicationCoordinator::navigate_right(&mut state, now);

        assert_eq!(state.navigation.cursor(), 2);
        assert_eq!(state.panels.active_panel_id(), Some("gamma"));
        assert_eq!(state.panels.active_selector_id(), Some("gamma"));
        assert_eq!(state.panels.visible_panel_id(), Some("gamma"));
    }

    #[test]
    fn test_left_arrow_wraps_to_last_panel() {
        let now = Instant::now();
        let mut state = loaded_state(now);

        ApplicationCoordinator::navigate_left(&mut state, now);

        assert_eq!(state.navigation.cursor(), 2);
        assert_eq!(state.panels.active_panel_id(), Some("gamma"));
    }

    #[test]
    fn test_keyboard_is_noop_without_document() {
        let now = Instant::now();
        let mut state = AppState::new();

        ApplicationCoordinator::navigate_right(&mut state, now);
        ApplicationCoordinator::navigate_left(&mut state, now);

        assert_eq!(state.navigation.cursor(), 0);
        assert_eq!(state.panels.active_panel_id(), None);
    }

    #[test]
    fn test_activating_missing_panel_keeps_selector_active() {
        let now = Instant::now();
        let mut state = loaded_state(now);
        state.effects.clear();

        ApplicationCoordinator::activate_selector(&mut state, "ghost", now);

        assert_eq!(state.panels.active_selector_id(), Some("ghost"));
        assert_eq!(state.panels.visible_panel_id(), None);
        // No panel shown means no deferred scroll either.
        assert!(state.effects.is_empty());
    }

    #[test]
    fn test_switch_schedules_deferred_scroll() {
        let now = Instant::now();
        let mut state = loaded_state(now);
        state.effects.clear();
        state.scroll.record_frame(900.0, 3000.0, 600.0);

        ApplicationCoordinator::activate_selector(&mut state, "beta", now);
        assert!(!state.scroll.is_animating());

        // The scroll only starts once the ~100ms delay elapses.
        ApplicationCoordinator::process_due_effects(&mut state, now + Duration::from_millis(50));
        assert!(!state.scroll.is_animating());

        ApplicationCoordinator::process_due_effects(&mut state, now + SWITCH_SCROLL_DELAY);
        assert!(state.scroll.is_animating());
    }

    #[test]
    fn test_load_animation_restores_targets_after_delay() {
        let now = Instant::now();
        let mut state = loaded_state(now);

        // All bars are zeroed synchronously at load.
        assert_eq!(state.animator.phase(), BarPhase::Zeroed);
        assert_eq!(state.animator.displayed_percent(80.0), 0.0);

        ApplicationCoordinator::process_due_effects(&mut state, now + BAR_RESTORE_DELAY);
        assert_eq!(state.animator.phase(), BarPhase::Restored);
        assert_eq!(state.animator.displayed_percent(80.0), 80.0);
        assert_eq!(state.animator.displayed_percent(35.0), 35.0);
    }

    #[test]
    fn test_progress_updates_from_geometry() {
        let now = Instant::now();
        let mut state = loaded_state(now);

        state.scroll.record_frame(700.0, 2000.0, 600.0);
        ApplicationCoordinator::update_reading_progress(&mut state);
        assert!((state.scroll.progress() - 50.0).abs() < 1e-4);

        // Degenerate geometry pins progress to 0%.
        state.scroll.record_frame(0.0, 500.0, 600.0);
        ApplicationCoordinator::update_reading_progress(&mut state);
        assert_eq!(state.scroll.progress(), 0.0);
    }

    #[test]
    fn test_mouse_click_does_not_move_cursor() {
        // Direct selector activation leaves the keyboard cursor alone; the
        // two are allowed to drift.
        let now = Instant::now();
        let mut state = loaded_state(now);

        ApplicationCoordinator::activate_selector(&mut state, "gamma", now);
        assert_eq!(state.navigation.cursor(), 0);

        ApplicationCoordinator::navigate_right(&mut state, now);
        assert_eq!(state.panels.active_panel_id(), Some("beta"));
    }
}
