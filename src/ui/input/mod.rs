//! Input handling for the Folio viewer.

pub mod keyboard_handler;

pub use keyboard_handler::{handle_keyboard_navigation, KeyboardNavResult};
