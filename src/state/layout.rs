//! Reading layout state.
//!
//! Holds the reader's preferred content column width, persisted across
//! sessions through eframe storage.

use serde::{Deserialize, Serialize};

const DEFAULT_CONTENT_WIDTH: f32 = 720.0;

/// Bounds for the content column width control.
pub const CONTENT_WIDTH_RANGE: std::ops::RangeInclusive<f32> = 420.0..=1080.0;

/// State related to the reading layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingLayout {
    /// Maximum width of the text column in points
    content_width: f32,
}

impl Default for ReadingLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingLayout {
    /// Creates a layout with the default column width.
    pub fn new() -> Self {
        Self {
            content_width: DEFAULT_CONTENT_WIDTH,
        }
    }

    /// Creates a layout with a specific column width, clamped to the
    /// supported range.
    pub fn with_content_width(content_width: f32) -> Self {
        Self {
            content_width: content_width
                .clamp(*CONTENT_WIDTH_RANGE.start(), *CONTENT_WIDTH_RANGE.end()),
        }
    }

    /// Returns the content column width.
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Returns a mutable reference to the column width (for UI handlers).
    pub fn content_width_mut(&mut self) -> &mut f32 {
        &mut self.content_width
    }
}
