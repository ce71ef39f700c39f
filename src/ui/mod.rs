//! UI panel rendering subsystem
//!
//! This module contains all UI rendering logic for the Folio viewer:
//! - Header panel (file controls, layout width, theme selector)
//! - Selector bar (the clickable row that switches content panels)
//! - Progress indicator (thin reading-progress bar under the header)
//! - Content panel (the active panel's blocks and metric bars)
//! - Status bar (document metadata display)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (keyboard panel navigation)

pub mod header;
pub mod selector_bar;
pub mod progress_indicator;
pub mod content_panel;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
