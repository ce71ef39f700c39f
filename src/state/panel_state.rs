//! Panel and selector activation state.
//!
//! This module encapsulates which panel is shown and which selector is
//! highlighted. Before the first switch the document's initial markup flags
//! decide visibility; every switch clears those flags so that from then on
//! exactly one panel and its paired selector carry the active state.

use rfolio::Document;

/// State related to panel/selector activation.
///
/// Responsibilities:
/// - Holding the ordered selector row captured at document load
/// - Tracking the single active panel and active selector
/// - Carrying (and clearing) the document's initial markup overrides
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    /// Ordered selector ids captured once at document load
    selector_ids: Vec<String>,
    /// Panels marked active by the document's initial markup, cleared on
    /// every switch
    markup_active: Vec<String>,
    /// Selector holding the active state after a switch
    active_selector: Option<String>,
    /// Panel holding the active state after a switch
    active_panel: Option<String>,
}

impl PanelState {
    /// Creates an empty panel state (no document loaded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the selector row and initial markup state from a document.
    pub fn from_document(document: &Document) -> Self {
        Self {
            selector_ids: document.selectors().iter().map(|s| s.id.clone()).collect(),
            markup_active: document.initially_active_ids(),
            active_selector: None,
            active_panel: None,
        }
    }

    // ===== Queries =====

    /// Returns the ordered selector ids.
    pub fn selector_ids(&self) -> &[String] {
        &self.selector_ids
    }

    /// Returns the selector id at the given index, if in range.
    pub fn selector_id_at(&self, index: usize) -> Option<&str> {
        self.selector_ids.get(index).map(|s| s.as_str())
    }

    /// Number of selectors captured at load.
    pub fn selector_count(&self) -> usize {
        self.selector_ids.len()
    }

    /// Returns the panel that should be shown: the active panel after a
    /// switch, or the first markup-active panel before any switch.
    pub fn visible_panel_id(&self) -> Option<&str> {
        self.active_panel
            .as_deref()
            .or_else(|| self.markup_active.first().map(|s| s.as_str()))
    }

    /// Returns the selector that should be highlighted, mirroring
    /// `visible_panel_id`.
    pub fn highlighted_selector_id(&self) -> Option<&str> {
        self.active_selector
            .as_deref()
            .or_else(|| self.markup_active.first().map(|s| s.as_str()))
    }

    /// Returns the active panel id set by the last switch, if any.
    pub fn active_panel_id(&self) -> Option<&str> {
        self.active_panel.as_deref()
    }

    /// Returns the active selector id set by the last switch, if any.
    pub fn active_selector_id(&self) -> Option<&str> {
        self.active_selector.as_deref()
    }

    // ===== Mutations =====

    /// Deactivates every panel and selector and clears the initial markup
    /// overrides, so steady-state styling governs non-active panels.
    pub fn clear_all_active(&mut self) {
        self.markup_active.clear();
        self.active_selector = None;
        self.active_panel = None;
    }

    /// Marks a selector active. Applied even when no panel matches the id.
    pub fn set_selector_active(&mut self, selector_id: &str) {
        self.active_selector = Some(selector_id.to_string());
    }

    /// Marks a panel active.
    pub fn set_panel_active(&mut self, panel_id: &str) {
        self.active_panel = Some(panel_id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfolio::parse_document;

    fn three_panel_doc() -> rfolio::Document {
        parse_document(
            r#"{
                "title": "T",
                "panels": [
                    {"id": "a", "label": "A", "initially_active": true},
                    {"id": "b", "label": "B", "initially_active": true},
                    {"id": "c", "label": "C"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_markup_state_governs_before_first_switch() {
        let state = PanelState::from_document(&three_panel_doc());
        // Multiple markup-active panels: the first one wins for display.
        assert_eq!(state.visible_panel_id(), Some("a"));
        assert_eq!(state.highlighted_selector_id(), Some("a"));
        assert_eq!(state.active_panel_id(), None);
    }

    #[test]
    fn test_switch_clears_markup_and_enforces_exclusivity() {
        let mut state = PanelState::from_document(&three_panel_doc());

        state.clear_all_active();
        state.set_selector_active("c");
        state.set_panel_active("c");

        assert_eq!(state.visible_panel_id(), Some("c"));
        assert_eq!(state.highlighted_selector_id(), Some("c"));

        // A second switch replaces, never accumulates.
        state.clear_all_active();
        state.set_selector_active("b");
        state.set_panel_active("b");
        assert_eq!(state.visible_panel_id(), Some("b"));
        assert_eq!(state.active_panel_id(), Some("b"));
    }

    #[test]
    fn test_selector_active_without_panel() {
        let mut state = PanelState::from_document(&three_panel_doc());

        // Switch targeting a missing panel: selector side effects apply,
        // no panel is shown.
        state.clear_all_active();
        state.set_selector_active("ghost");

        assert_eq!(state.highlighted_selector_id(), Some("ghost"));
        assert_eq!(state.visible_panel_id(), None);
    }

    #[test]
    fn test_selector_row_captured_in_order() {
        let state = PanelState::from_document(&three_panel_doc());
        assert_eq!(state.selector_count(), 3);
        assert_eq!(state.selector_id_at(0), Some("a"));
        assert_eq!(state.selector_id_at(2), Some("c"));
        assert_eq!(state.selector_id_at(3), None);
    }
}
