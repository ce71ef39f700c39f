//! Content scroll state management.
//!
//! This module encapsulates the vertical scroll position of the content
//! area, the geometry needed to derive the reading progress ratio, and the
//! target of an in-flight animated scroll.

use crate::domain::scrolling;

/// State related to the content scroll area.
///
/// Responsibilities:
/// - Recording per-frame scroll offset and geometry
/// - Caching the derived reading progress ratio
/// - Driving animated scrolls toward a target offset
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Current vertical scroll offset in pixels
    offset: f32,
    /// Total content height measured last frame
    content_height: f32,
    /// Visible viewport height measured last frame
    viewport_height: f32,
    /// Reading progress ratio in [0, 100]
    progress: f32,
    /// Target offset of an animated scroll, if one is in flight
    scroll_target: Option<f32>,
}

impl ScrollState {
    /// Creates a scroll state at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets to the origin, dropping any in-flight animation.
    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.content_height = 0.0;
        self.viewport_height = 0.0;
        self.progress = 0.0;
        self.scroll_target = None;
    }

    /// Records the measurements of the current frame.
    pub fn record_frame(&mut self, offset: f32, content_height: f32, viewport_height: f32) {
        self.offset = offset.max(0.0);
        self.content_height = content_height;
        self.viewport_height = viewport_height;
    }

    // ===== Queries =====

    /// Returns the current vertical scroll offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Returns the content height measured last frame.
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Returns the viewport height measured last frame.
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Returns the cached reading progress ratio in [0, 100].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Returns true while an animated scroll is in flight.
    pub fn is_animating(&self) -> bool {
        self.scroll_target.is_some()
    }

    // ===== Mutations =====

    /// Caches a freshly derived progress ratio.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
    }

    /// Starts an animated scroll toward the given offset.
    ///
    /// Once started the animation runs to completion; starting another
    /// simply replaces the target (last write wins).
    pub fn start_animated_scroll(&mut self, target: f32) {
        self.scroll_target = Some(target.max(0.0));
    }

    /// Advances the animated scroll by one frame.
    ///
    /// Returns the offset to apply this frame, or None when no animation is
    /// in flight. Clears the target once the offset has converged.
    pub fn step_animation(&mut self, dt: f32) -> Option<f32> {
        let target = self.scroll_target?;
        let next = scrolling::approach(self.offset, target, dt);
        if scrolling::reached(next, target) {
            self.scroll_target = None;
            self.offset = target;
            Some(target)
        } else {
            self.offset = next;
            Some(next)
        }
    }
}
