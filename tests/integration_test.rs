use rfolio::{
    Document, DocumentSource, DocumentWriter, FileDocumentSource, MetricBar, Panel,
    SampleDocumentSource, parse_document,
};
use anyhow::Result;
use std::env;
use std::fs;

fn report_document() -> Document {
    Document {
        title: "Release Readiness".to_string(),
        subtitle: Some("Build 418".to_string()),
        metadata: serde_json::json!({
            "author": "perf-team",
            "revision": 3
        }),
        selectors: None,
        panels: vec![
            Panel {
                id: "summary".to_string(),
                label: "Summary".to_string(),
                blocks: vec![
                    "Overall throughput improved against the previous baseline.".to_string(),
                    "No regressions were observed on the hot paths.".to_string(),
                ],
                metrics: vec![MetricBar {
                    label: "Confidence".to_string(),
                    target_percent: 92.0,
                }],
                initially_active: true,
            },
            Panel {
                id: "details".to_string(),
                label: "Details".to_string(),
                blocks: vec!["Benchmark configuration matches production.".to_string()],
                metrics: vec![],
                initially_active: false,
            },
        ],
    }
}

#[test]
fn test_write_and_read_basic_document() -> Result<()> {
    let test_file = env::temp_dir().join("test_report.folio.json");
    let test_file = test_file.to_str().unwrap();

    // Clean up any existing file
    let _ = fs::remove_file(test_file);

    DocumentWriter::new(test_file)?.write_document(&report_document())?;

    // Read the document back through the source trait
    let reader = FileDocumentSource::new();
    let doc = reader.read(test_file)?;

    assert_eq!(doc.title, "Release Readiness");
    assert_eq!(doc.subtitle.as_deref(), Some("Build 418"));
    assert_eq!(doc.metadata["author"], "perf-team");

    assert_eq!(doc.panels.len(), 2);
    let summary = doc.panel("summary").unwrap();
    assert_eq!(summary.label, "Summary");
    assert_eq!(summary.blocks.len(), 2);
    assert_eq!(summary.metrics[0].target_percent, 92.0);
    assert!(summary.initially_active);

    // Selector row is derived from the panels when not declared
    let selectors = doc.selectors();
    assert_eq!(selectors.len(), 2);
    assert_eq!(selectors[1].id, "details");

    assert_eq!(doc.initially_active_ids(), vec!["summary"]);

    let _ = fs::remove_file(test_file);
    Ok(())
}

#[test]
fn test_write_and_read_brotli_document() -> Result<()> {
    let test_file = env::temp_dir().join("test_report.folio.json.br");
    let test_file = test_file.to_str().unwrap();

    let _ = fs::remove_file(test_file);

    DocumentWriter::new(test_file)?.write_document(&report_document())?;

    // The compressed file must not be readable as plain JSON
    let raw = fs::read(test_file)?;
    assert!(serde_json::from_slice::<serde_json::Value>(&raw).is_err());

    let doc = FileDocumentSource::new().read(test_file)?;
    assert_eq!(doc.title, "Release Readiness");
    assert_eq!(doc.word_count(), report_document().word_count());

    let _ = fs::remove_file(test_file);
    Ok(())
}

#[test]
fn test_writer_rejects_invalid_document() -> Result<()> {
    let test_file = env::temp_dir().join("test_invalid.folio.json");
    let test_file = test_file.to_str().unwrap();

    let mut doc = report_document();
    doc.panels[1].id = "summary".to_string(); // duplicate id

    let result = DocumentWriter::new(test_file)?.write_document(&doc);
    assert!(result.is_err());

    let _ = fs::remove_file(test_file);
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    let result = FileDocumentSource::new().read("/nonexistent/report.folio.json");
    assert!(result.is_err());
}

#[test]
fn test_sample_source_round_trips_through_disk() -> Result<()> {
    let test_file = env::temp_dir().join("test_sample.folio.json");
    let test_file = test_file.to_str().unwrap();

    let sample = SampleDocumentSource::with_seed(7).read("")?;
    DocumentWriter::new(test_file)?.write_document(&sample)?;

    let reloaded = FileDocumentSource::new().read(test_file)?;
    assert_eq!(reloaded.title, sample.title);
    assert_eq!(reloaded.panels.len(), sample.panels.len());
    assert_eq!(reloaded.word_count(), sample.word_count());

    let _ = fs::remove_file(test_file);
    Ok(())
}

#[test]
fn test_parse_document_tolerates_unmatched_selector() {
    // A selector without a matching panel is valid input; the viewer treats
    // activating it as a silent no-op for the panel-show step.
    let doc = parse_document(
        r#"{
            "title": "T",
            "selectors": [
                {"id": "a", "label": "A"},
                {"id": "missing", "label": "Missing"}
            ],
            "panels": [{"id": "a", "label": "A"}]
        }"#,
    )
    .unwrap();

    assert_eq!(doc.selectors().len(), 2);
    assert!(doc.panel("missing").is_none());
}
