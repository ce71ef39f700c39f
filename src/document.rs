use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use anyhow::{Result, Context, bail};
use brotli::Decompressor;

/// A decorative bar whose width visually encodes a fixed value.
///
/// The declared `target_percent` is the end state of the one-shot load
/// animation; the viewer plays the zero-to-target transition once per
/// document load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricBar {
    pub label: String,
    pub target_percent: f32,
}

/// A content region shown and hidden as a unit.
///
/// `initially_active` is the document's initial markup state: it governs
/// which panel(s) are visible before the first switch and is cleared by the
/// viewer on every switch thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub blocks: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<MetricBar>,
    #[serde(default)]
    pub initially_active: bool,
}

/// The clickable control that activates a given panel, paired 1:1 by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selector {
    pub id: String,
    pub label: String,
}

/// A complete folio document: title, metadata, and an ordered set of panels.
///
/// When `selectors` is omitted the selector row is derived from the panel
/// list. A declared selector whose id matches no panel is tolerated: the
/// viewer activates the selector and silently skips the panel-show step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
    #[serde(default)]
    pub selectors: Option<Vec<Selector>>,
    pub panels: Vec<Panel>,
}

impl Document {
    /// Returns the selector row: the declared list, or one derived from the
    /// panels when the document omits it.
    pub fn selectors(&self) -> Vec<Selector> {
        match &self.selectors {
            Some(declared) => declared.clone(),
            None => self
                .panels
                .iter()
                .map(|p| Selector {
                    id: p.id.clone(),
                    label: p.label.clone(),
                })
                .collect(),
        }
    }

    /// Looks up a panel by id.
    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// Ids of panels marked active in the initial markup state.
    pub fn initially_active_ids(&self) -> Vec<String> {
        self.panels
            .iter()
            .filter(|p| p.initially_active)
            .map(|p| p.id.clone())
            .collect()
    }

    /// Total number of whitespace-separated words across all panel blocks.
    pub fn word_count(&self) -> usize {
        self.panels
            .iter()
            .flat_map(|p| p.blocks.iter())
            .map(|b| b.split_whitespace().count())
            .sum()
    }

    /// Total number of metric bars across all panels.
    pub fn metric_count(&self) -> usize {
        self.panels.iter().map(|p| p.metrics.len()).sum()
    }

    /// Structural validation: panel ids must be unique and metric targets
    /// must land in [0, 100].
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for panel in &self.panels {
            if !seen.insert(panel.id.as_str()) {
                bail!("Duplicate panel id: {}", panel.id);
            }
            for metric in &panel.metrics {
                if !(0.0..=100.0).contains(&metric.target_percent) {
                    bail!(
                        "Metric '{}' in panel '{}' has target {} outside [0, 100]",
                        metric.label,
                        panel.id,
                        metric.target_percent
                    );
                }
            }
        }
        Ok(())
    }
}

/// Parses and validates a document from a JSON string.
///
/// # Examples
///
/// ```
/// let doc = rfolio::parse_document(r#"{
///     "title": "Report",
///     "panels": [{"id": "a", "label": "A"}]
/// }"#).unwrap();
/// assert_eq!(doc.selectors().len(), 1);
/// ```
pub fn parse_document(json: &str) -> Result<Document> {
    let doc: Document =
        serde_json::from_str(json).context("Failed to parse document JSON")?;
    doc.validate()?;
    Ok(doc)
}

/// A source of documents. The file reader and the built-in sample generator
/// both implement this, so the loader can treat them uniformly.
pub trait DocumentSource {
    fn read(&self, path: &str) -> Result<Document>;
}

/// Reads documents from disk.
///
/// Plain JSON is read directly; paths ending in `.br` are transparently
/// decompressed with Brotli (e.g. `report.folio.json.br`).
pub struct FileDocumentSource;

impl FileDocumentSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileDocumentSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSource for FileDocumentSource {
    fn read(&self, path: &str) -> Result<Document> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open document: {}", path))?;

        let mut json = String::new();
        if path.ends_with(".br") {
            let mut decompressor = Decompressor::new(BufReader::new(file), 4096);
            decompressor
                .read_to_string(&mut json)
                .with_context(|| format!("Failed to decompress document: {}", path))?;
        } else {
            BufReader::new(file)
                .read_to_string(&mut json)
                .with_context(|| format!("Failed to read document: {}", path))?;
        }

        parse_document(&json).with_context(|| format!("Invalid document: {}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_doc(panels: &str) -> String {
        format!(r#"{{"title": "T", "panels": {}}}"#, panels)
    }

    #[test]
    fn test_selectors_derived_from_panels() {
        let doc = parse_document(&minimal_doc(
            r#"[{"id": "a", "label": "A"}, {"id": "b", "label": "B"}]"#,
        ))
        .unwrap();

        let selectors = doc.selectors();
        assert_eq!(selectors.len(), 2);
        assert_eq!(selectors[0].id, "a");
        assert_eq!(selectors[1].label, "B");
    }

    #[test]
    fn test_declared_selectors_take_precedence() {
        let json = r#"{
            "title": "T",
            "selectors": [{"id": "a", "label": "A"}, {"id": "ghost", "label": "Ghost"}],
            "panels": [{"id": "a", "label": "A"}]
        }"#;
        let doc = parse_document(json).unwrap();

        // The ghost selector is tolerated even though no panel matches it.
        let selectors = doc.selectors();
        assert_eq!(selectors.len(), 2);
        assert!(doc.panel("ghost").is_none());
    }

    #[test]
    fn test_duplicate_panel_ids_rejected() {
        let result = parse_document(&minimal_doc(
            r#"[{"id": "a", "label": "A"}, {"id": "a", "label": "A2"}]"#,
        ));
        assert!(result.is_err());
    }

    #[test]
    fn test_metric_target_out_of_range_rejected() {
        let result = parse_document(&minimal_doc(
            r#"[{"id": "a", "label": "A", "metrics": [{"label": "m", "target_percent": 120.0}]}]"#,
        ));
        assert!(result.is_err());
    }

    #[test]
    fn test_initially_active_ids() {
        let doc = parse_document(&minimal_doc(
            r#"[
                {"id": "a", "label": "A", "initially_active": true},
                {"id": "b", "label": "B"},
                {"id": "c", "label": "C", "initially_active": true}
            ]"#,
        ))
        .unwrap();
        assert_eq!(doc.initially_active_ids(), vec!["a", "c"]);
    }

    #[test]
    fn test_word_count() {
        let doc = parse_document(&minimal_doc(
            r#"[{"id": "a", "label": "A", "blocks": ["one two three", "four five"]}]"#,
        ))
        .unwrap();
        assert_eq!(doc.word_count(), 5);
    }
}
