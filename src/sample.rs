use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use crate::document::{Document, DocumentSource, MetricBar, Panel};

const DEFAULT_SEED: u64 = 42;

// Word bank for generated paragraph text.
const WORDS: &[&str] = &[
    "throughput", "latency", "pipeline", "baseline", "regression", "cache",
    "allocator", "scheduler", "workload", "measurement", "variance", "sample",
    "iteration", "budget", "overhead", "saturation", "bandwidth", "profile",
    "release", "candidate", "hotpath", "benchmark", "duration", "percentile",
];

const PANEL_TOPICS: &[(&str, &str)] = &[
    ("overview", "Overview"),
    ("benchmarks", "Benchmarks"),
    ("memory", "Memory"),
    ("regressions", "Regressions"),
    ("notes", "Notes"),
];

/// Generates a self-contained sample document in memory.
///
/// Useful for demos and tests when no document file is at hand, the same way
/// a synthetic data source would be. Generation is seeded for
/// reproducibility; the default seed is 42.
pub struct SampleDocumentSource {
    seed: u64,
}

impl SampleDocumentSource {
    pub fn new() -> Self {
        Self { seed: DEFAULT_SEED }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SampleDocumentSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSource for SampleDocumentSource {
    fn read(&self, _path: &str) -> anyhow::Result<Document> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let num_panels = rng.gen_range(3..=PANEL_TOPICS.len());
        let panels = PANEL_TOPICS[..num_panels]
            .iter()
            .enumerate()
            .map(|(i, (id, label))| Panel {
                id: (*id).to_string(),
                label: (*label).to_string(),
                blocks: generate_blocks(&mut rng),
                metrics: generate_metrics(&mut rng, label),
                // The first panel is visible before any switch, like a page
                // whose markup ships with one section pre-activated.
                initially_active: i == 0,
            })
            .collect();

        let doc = Document {
            title: "Quarterly Performance Report".to_string(),
            subtitle: Some(format!("Synthetic sample, seed {}", self.seed)),
            metadata: sample_metadata().clone(),
            selectors: None,
            panels,
        };
        doc.validate()?;
        Ok(doc)
    }
}

fn sample_metadata() -> &'static serde_json::Value {
    static METADATA: once_cell::sync::Lazy<serde_json::Value> =
        once_cell::sync::Lazy::new(|| {
            serde_json::json!({
                "generator": "SampleDocumentSource",
                "description": "Synthetic document for demos and testing"
            })
        });
    &METADATA
}

fn generate_blocks(rng: &mut StdRng) -> Vec<String> {
    let num_blocks = rng.gen_range(3..=8);
    (0..num_blocks)
        .map(|_| {
            let num_words = rng.gen_range(40..=120);
            let mut words = Vec::with_capacity(num_words);
            for _ in 0..num_words {
                words.push(WORDS[rng.gen_range(0..WORDS.len())]);
            }
            let mut sentence = words.join(" ");
            sentence.push('.');
            // Capitalize the first word so blocks read like prose.
            sentence[..1].to_uppercase() + &sentence[1..]
        })
        .collect()
}

fn generate_metrics(rng: &mut StdRng, topic: &str) -> Vec<MetricBar> {
    let num_metrics = rng.gen_range(0..=4);
    (0..num_metrics)
        .map(|i| MetricBar {
            label: format!("{} metric {}", topic, i + 1),
            target_percent: rng.gen_range(5..=100) as f32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_document_is_valid() {
        let doc = SampleDocumentSource::new().read("").unwrap();
        assert!(doc.validate().is_ok());
        assert!(doc.panels.len() >= 3);
        assert!(doc.word_count() > 0);
    }

    #[test]
    fn test_sample_is_reproducible() {
        let a = SampleDocumentSource::with_seed(7).read("").unwrap();
        let b = SampleDocumentSource::with_seed(7).read("").unwrap();
        assert_eq!(a.panels.len(), b.panels.len());
        assert_eq!(a.word_count(), b.word_count());
    }

    #[test]
    fn test_sample_has_single_initially_active_panel() {
        let doc = SampleDocumentSource::new().read("").unwrap();
        assert_eq!(doc.initially_active_ids().len(), 1);
        assert_eq!(doc.initially_active_ids()[0], doc.panels[0].id);
    }
}
