pub mod document;
pub mod sample;
pub mod writer;
pub mod theme;

// Export document model and sources
pub use document::{
    Document, Panel, Selector, MetricBar,
    DocumentSource, FileDocumentSource, parse_document,
};

// Export sample generator
pub use sample::SampleDocumentSource;

// Export writer
pub use writer::DocumentWriter;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_alpha};
