//! Keyboard navigation cursor state.
//!
//! This module owns the cursor over the ordered selector row. The cursor is
//! an explicit state value (not an ambient global) so it can be exercised in
//! unit tests without a live window. It deliberately does not track which
//! panel is active: clicking a selector with the mouse leaves the cursor
//! where it was.

/// Cursor over the selector row, advanced by arrow keys.
///
/// Responsibilities:
/// - Wrapping the cursor with modular arithmetic in both directions
/// - Capturing the selector count once per document load
/// - Degrading to a no-op when no selectors exist
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    /// Current cursor position in [0, selector_count)
    cursor: usize,
    /// Number of selectors captured at document load
    selector_count: usize,
}

impl NavigationState {
    /// Creates a navigation state with no selectors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the cursor to 0 and captures a new selector count.
    pub fn reset(&mut self, selector_count: usize) {
        self.cursor = 0;
        self.selector_count = selector_count;
    }

    // ===== Queries =====

    /// Returns the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the captured selector count.
    pub fn selector_count(&self) -> usize {
        self.selector_count
    }

    // ===== Mutations =====

    /// Moves the cursor one selector to the right, wrapping at the end.
    ///
    /// Returns the new cursor position, or None when no selectors exist.
    pub fn advance(&mut self) -> Option<usize> {
        if self.selector_count == 0 {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.selector_count;
        Some(self.cursor)
    }

    /// Moves the cursor one selector to the left, wrapping at the start.
    ///
    /// Returns the new cursor position, or None when no selectors exist.
    pub fn retreat(&mut self) -> Option<usize> {
        if self.selector_count == 0 {
            return None;
        }
        self.cursor = (self.cursor + self.selector_count - 1) % self.selector_count;
        Some(self.cursor)
    }
}
