//! Centralized application state for the Folio viewer.
//!
//! This module composes focused state components that each manage a specific
//! aspect of the application's state. This approach:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations

use crate::app::EffectQueue;
use crate::state::{
    DocumentState, PanelState, NavigationState, ScrollState,
    AnimatorState, ThemeState, ReadingLayout,
};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Document data and file state
    pub document: DocumentState,

    /// Panel and selector activation state
    pub panels: PanelState,

    /// Keyboard navigation cursor
    pub navigation: NavigationState,

    /// Content scroll offset, geometry, and reading progress
    pub scroll: ScrollState,

    /// One-shot metric bar load animation
    pub animator: AnimatorState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Reading layout preferences
    pub layout: ReadingLayout,

    // ===== Top-Level State =====
    /// Pending deferred effects (post-switch scroll, bar restore)
    pub effects: EffectQueue,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            document: DocumentState::new(),
            panels: PanelState::new(),
            navigation: NavigationState::new(),
            scroll: ScrollState::new(),
            animator: AnimatorState::new(),
            theme: ThemeState::new(),
            layout: ReadingLayout::new(),
            effects: EffectQueue::new(),
            error_message: None,
        }
    }

    /// Creates a new AppState with theme and layout settings loaded from
    /// storage.
    pub fn with_theme_and_layout(theme_name: String, content_width: f32) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            layout: ReadingLayout::with_content_width(content_width),
            ..Self::new()
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets the document-related state when loading a new document.
    ///
    /// This clears document data, panel activation, the navigation cursor,
    /// scroll position, the bar animation, and pending effects.
    pub fn reset_document_state(&mut self) {
        self.document.clear();
        self.panels = PanelState::new();
        self.navigation.reset(0);
        self.scroll.reset();
        self.animator.reset();
        self.effects.clear();
        self.error_message = None;
    }
}
