//! Application-level modules for the Folio document viewer.
//!
//! This module contains the application coordinator, centralized state
//! management, deferred effect scheduling, and settings persistence.

mod app_state;
mod application_coordinator;
mod effect_queue;
mod theme_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use effect_queue::{DeferredEffect, EffectQueue};
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::SettingsCoordinator;
