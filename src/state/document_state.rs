//! Document data and file state management.
//!
//! This module encapsulates all state related to the loaded document,
//! including the document itself and its source file path.

use rfolio::Document;
use std::path::PathBuf;

/// State related to the loaded document.
///
/// Responsibilities:
/// - Managing document data lifetime
/// - Tracking source file path (None for the built-in sample)
#[derive(Default)]
pub struct DocumentState {
    /// The currently loaded document (if any)
    document: Option<Document>,
    /// Path to the currently loaded file (None for sample documents)
    file_path: Option<PathBuf>,
}

impl DocumentState {
    /// Creates a new document state with nothing loaded.
    pub fn new() -> Self {
        Self {
            document: None,
            file_path: None,
        }
    }

    /// Loads a new document.
    ///
    /// # Arguments
    /// * `document` - The document to load
    /// * `path` - Optional file path (None for sample documents)
    pub fn load(&mut self, document: Document, path: Option<PathBuf>) {
        self.document = Some(document);
        self.file_path = path;
    }

    /// Clears all document state.
    pub fn clear(&mut self) {
        self.document = None;
        self.file_path = None;
    }

    /// Returns a reference to the loaded document, if any.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Returns the file path of the loaded document, if any.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}
