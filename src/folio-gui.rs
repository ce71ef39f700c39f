//! Folio Document Viewer GUI Application
//!
//! This module provides an interactive desktop viewer for folio documents
//! using the egui framework. The viewer features:
//! - A selector bar that switches between named content panels
//! - A reading-progress indicator driven by the content scroll position
//! - A scroll-to-top control that appears past a fixed scroll threshold

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - A one-shot metric bar animation played when a document loads
//! - Arrow-key navigation stepping through the selector row
//! - Multiple reading themes with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management, coordination, deferred effects
//! - `domain/` - Core interaction logic (progress ratio, scroll rules)
//! - `io/` - Asynchronous document loading
//! - `utils/` - Utility functions for formatting
//! - `ui/` - UI panel rendering and keyboard input handling
//! - `state/` - Focused state components (panels, cursor, scroll, themes)

use eframe::egui;
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod utils;
mod domain;
mod io;
mod app;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator, SettingsCoordinator};
use io::AsyncLoader;
use ui::panel_manager::PanelManager;

const CONTENT_WIDTH_KEY: &str = "content_width";

/// Main application entry point that initializes and launches the Folio
/// document viewer GUI.
fn main() -> eframe::Result {
    // Parse command-line arguments to check for initial document to load
    let initial_file = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_title("Folio Document Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Folio Document Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(FolioViewerApp::new(cc, initial_file)))),
    )
}

/// The main Folio viewer application.
///
/// This struct stays small by delegating most functionality:
/// - `ApplicationCoordinator` handles loading, switching, navigation, and
///   deferred effect delivery
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct FolioViewerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous document loader
    loader: AsyncLoader,
    /// Optional document to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl Default for FolioViewerApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
            loader: AsyncLoader::new(),
            pending_file_load: None,
        }
    }
}

impl FolioViewerApp {
    /// Creates a new viewer instance with theme and layout settings loaded
    /// from persistent storage. Optionally accepts an initial document path
    /// to load on startup.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);

        let content_width: f32 =
            SettingsCoordinator::load_setting_or(cc.storage, CONTENT_WIDTH_KEY, 720.0);

        Self {
            state: AppState::with_theme_and_layout(current_theme_name, content_width),
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(
        &mut self,
        interaction: ui::panel_manager::PanelInteraction,
        ctx: &egui::Context,
        now: Instant,
    ) {
        match interaction {
            ui::panel_manager::PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            ui::panel_manager::PanelInteraction::OpenSampleRequested => {
                ApplicationCoordinator::open_sample(&mut self.state, &mut self.loader, now);
            }
            ui::panel_manager::PanelInteraction::SelectorActivated { selector_id } => {
                ApplicationCoordinator::activate_selector(&mut self.state, &selector_id, now);
            }
            ui::panel_manager::PanelInteraction::ScrollToTopRequested => {
                ApplicationCoordinator::scroll_to_top(&mut self.state);
            }
            ui::panel_manager::PanelInteraction::KeyboardAdvance => {
                ApplicationCoordinator::navigate_right(&mut self.state, now);
            }
            ui::panel_manager::PanelInteraction::KeyboardRetreat => {
                ApplicationCoordinator::navigate_left(&mut self.state, now);
            }
        }
    }
}

impl eframe::App for FolioViewerApp {
    /// Called when the app is being shut down - ensures preferences are
    /// saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(
            storage,
            CONTENT_WIDTH_KEY,
            &self.state.layout.content_width(),
        );
    }

    /// Main update loop that renders all UI panels and handles application
    /// state.
    ///
    /// The loop delegates to coordinators:
    /// 1. Check for async loading completion
    /// 2. Apply theme
    /// 3. Load initial document if specified via command line
    /// 4. Deliver due deferred effects (post-switch scroll, bar restore)
    /// 5. Render all panels via PanelManager and handle interactions
    /// 6. Recompute the reading progress from this frame's geometry
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Check for async loading completion
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader, now);

        // Apply current theme
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist preferences during frame (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            storage.set_string(
                "theme_preference",
                self.state.theme.current_theme_name().to_string(),
            );
            SettingsCoordinator::save_setting(
                storage,
                CONTENT_WIDTH_KEY,
                &self.state.layout.content_width(),
            );
        }

        // Load initial document if specified via command line (first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        // Deliver deferred effects that have come due
        ApplicationCoordinator::process_due_effects(&mut self.state, now);

        // Render all panels and get interaction result
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx, now);
        }

        // Recompute reading progress from the geometry recorded this frame
        ApplicationCoordinator::update_reading_progress(&mut self.state);

        // Pending deferred effects need a wakeup even without input
        if !self.state.effects.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
