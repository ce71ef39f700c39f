//! Asynchronous document loading.
//!
//! This module handles loading folio documents in background threads,
//! keeping the GUI responsive during file I/O operations.

use eframe::egui;
use rfolio::{Document, DocumentSource, FileDocumentSource, SampleDocumentSource};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use crate::io::LoadingState;

/// Result of a completed document loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// The loaded document
        document: Document,
        /// Path to the file that was loaded (None for sample documents)
        path: Option<PathBuf>,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages asynchronous loading of document files.
///
/// Coordinates background thread file loading with the main GUI thread,
/// ensuring responsive UI during potentially long-running I/O operations.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<Document, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        let state = self.loading_state.lock().unwrap();
        state.in_progress
    }

    /// Starts loading a document file asynchronously from the given path.
    ///
    /// The GUI remains responsive during loading. Call `check_completion()`
    /// once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path to the document file to load
    /// * `ctx` - egui context for requesting repaints when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        {
            let mut state = self.loading_state.lock().unwrap();
            state.in_progress = true;
        }

        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();
        let path_string = path.to_string_lossy().into_owned();

        thread::spawn(move || {
            let reader = FileDocumentSource::new();
            let result = reader.read(&path_string).map_err(|e| format!("{:#}", e));

            let _ = sender.send(result);

            {
                let mut state = loading_state.lock().unwrap();
                state.in_progress = false;
            }

            ctx_handle.request_repaint();
        });
    }

    /// Generates the built-in sample document in-memory.
    ///
    /// Generation is fast, so this runs synchronously on the GUI thread.
    pub fn load_sample(&mut self) -> Result<Document, String> {
        let sample = SampleDocumentSource::new();
        sample.read("").map_err(|e| e.to_string())
    }

    /// Checks if background loading has completed and returns the result if
    /// available. Called once per frame in the update loop.
    pub fn check_completion(&mut self) -> LoadResult {
        if let Some(receiver) = &self.loading_receiver {
            if let Ok(result) = receiver.try_recv() {
                let load_result = match result {
                    Ok(document) => {
                        let path = self.pending_load_path.take();
                        LoadResult::Success { document, path }
                    }
                    Err(error_msg) => {
                        self.pending_load_path = None;
                        LoadResult::Error(error_msg)
                    }
                };

                self.loading_receiver = None;

                return load_result;
            }
        }

        LoadResult::None
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_loader_creation() {
        let loader = AsyncLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_sample_loading() {
        let mut loader = AsyncLoader::new();
        let result = loader.load_sample();
        assert!(result.is_ok(), "Sample document loading should succeed");
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncLoader::new();
        let result = loader.check_completion();
        assert!(matches!(result, LoadResult::None));
    }
}
