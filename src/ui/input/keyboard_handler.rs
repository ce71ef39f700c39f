//! Keyboard panel navigation input.
//!
//! Reads the two horizontal arrow keys and reports which way the selector
//! cursor should move. Any other key has no effect. Arrow keys are left
//! alone while a text widget owns keyboard focus, so typing in the header
//! never switches panels.

use eframe::egui;

/// Result of keyboard navigation input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardNavResult {
    /// No navigation key was pressed
    None,
    /// Move the cursor one selector to the right
    Advance,
    /// Move the cursor one selector to the left
    Retreat,
}

/// Checks the frame's input for arrow-key panel navigation.
pub fn handle_keyboard_navigation(ctx: &egui::Context) -> KeyboardNavResult {
    if ctx.wants_keyboard_input() {
        return KeyboardNavResult::None;
    }

    let (right, left) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::ArrowRight),
            i.key_pressed(egui::Key::ArrowLeft),
        )
    });

    if right {
        KeyboardNavResult::Advance
    } else if left {
        KeyboardNavResult::Retreat
    } else {
        KeyboardNavResult::None
    }
}
