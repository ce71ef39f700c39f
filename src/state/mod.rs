//! State management modules for the Folio document viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Document state (document data, file path)
//! - Panel state (active panel/selector flags, initial markup overrides)
//! - Navigation state (keyboard cursor over the selector row)
//! - Scroll state (content scroll offset, geometry, reading progress)
//! - Animator state (one-shot metric bar load animation)
//! - Theme state (theme manager, current theme)
//! - Layout state (reading column width)

mod document_state;
mod panel_state;
mod navigation;
mod scroll;
mod animator;
mod theme_state;
mod layout;

pub use document_state::DocumentState;
pub use panel_state::PanelState;
pub use navigation::NavigationState;
pub use scroll::ScrollState;
pub use animator::{AnimatorState, BarPhase};
pub use theme_state::ThemeState;
pub use layout::{ReadingLayout, CONTENT_WIDTH_RANGE};
