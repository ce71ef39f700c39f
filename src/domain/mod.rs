//! Domain logic modules for the Folio document viewer.
//!
//! This module contains core interaction logic, kept free of UI concerns:
//! - Progress (reading progress ratio derivation)
//! - Scrolling (scroll-to-top threshold, animated scroll easing)

pub mod progress;
pub mod scrolling;
