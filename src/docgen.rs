use rfolio::{Document, DocumentWriter, MetricBar, Panel};
use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use std::env;

// Section topics for generated documents - (id, label)
const TOPICS: &[(&str, &str)] = &[
    ("overview", "Overview"),
    ("methodology", "Methodology"),
    ("benchmarks", "Benchmarks"),
    ("memory", "Memory"),
    ("regressions", "Regressions"),
    ("appendix", "Appendix"),
    ("notes", "Notes"),
    ("glossary", "Glossary"),
];

// Word bank for generated paragraph text
const WORDS: &[&str] = &[
    "throughput", "latency", "pipeline", "baseline", "regression", "cache",
    "allocator", "scheduler", "workload", "measurement", "variance", "sample",
    "iteration", "budget", "overhead", "saturation", "bandwidth", "profile",
    "release", "candidate", "hotpath", "benchmark", "duration", "percentile",
    "speedup", "footprint", "threshold", "heuristic", "rollout", "artifact",
];

const METRIC_NAMES: &[&str] = &[
    "Cache hit rate", "CPU utilization", "Coverage", "Completion",
    "Memory headroom", "Success rate",
];

struct Config {
    num_panels: usize,
    blocks_min: usize,
    blocks_max: usize,
    max_metrics: usize,
    seed: u64,
    output_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_panels: 4,
            blocks_min: 3,
            blocks_max: 8,
            max_metrics: 4,
            seed: 42,
            output_file: None,
            use_brotli: false,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-panels" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-panels requires an argument");
                }
                config.num_panels = args[i].parse()?;
                if config.num_panels > TOPICS.len() {
                    anyhow::bail!("-panels supports at most {}", TOPICS.len());
                }
            }
            "-blocks" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-blocks requires at least one argument");
                }
                config.blocks_min = args[i].parse()?;
                // Check if there's a second number (range)
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    if let Ok(max) = args[i + 1].parse::<usize>() {
                        i += 1;
                        config.blocks_max = max;
                    } else {
                        config.blocks_max = config.blocks_min;
                    }
                } else {
                    config.blocks_max = config.blocks_min;
                }
            }
            "-metrics" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-metrics requires an argument");
                }
                config.max_metrics = args[i].parse()?;
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    if config.blocks_min > config.blocks_max {
        anyhow::bail!("-blocks range is inverted");
    }

    Ok(config)
}

fn print_help() {
    println!("Folio Document Generator");
    println!("Usage: folio-docgen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -panels <N>            Number of content panels (default: 4, max: {})", TOPICS.len());
    println!("  -blocks <N> [M]        Paragraph blocks per panel (default: 3 8)");
    println!("                         If two numbers provided, picks a random count in [N, M]");
    println!("  -metrics <N>           Maximum metric bars per panel (default: 4)");
    println!("  -seed <N>              RNG seed for reproducible output (default: 42)");
    println!("  -out <FILE>            Output file path (default: report.folio.json)");
    println!("  -brotli                Write compressed document using Brotli (output: *.json.br)");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    let config = parse_args()?;

    let output_path = config.output_file.clone().unwrap_or_else(|| {
        if config.use_brotli {
            "report.folio.json.br".to_string()
        } else {
            "report.folio.json".to_string()
        }
    });

    let document = generate_document(&config);
    DocumentWriter::new(&output_path)?.write_document(&document)?;

    println!("Document written to: {}", output_path);
    println!(
        "  Panels: {}  Words: {}  Metrics: {}",
        document.panels.len(),
        document.word_count(),
        document.metric_count()
    );

    Ok(())
}

fn generate_document(config: &Config) -> Document {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let panels = TOPICS[..config.num_panels]
        .iter()
        .enumerate()
        .map(|(index, (id, label))| Panel {
            id: (*id).to_string(),
            label: (*label).to_string(),
            blocks: generate_blocks(&mut rng, config),
            metrics: generate_metrics(&mut rng, label, config.max_metrics),
            initially_active: index == 0,
        })
        .collect();

    Document {
        title: "Quarterly Performance Report".to_string(),
        subtitle: Some(format!("Generated document, seed {}", config.seed)),
        metadata: serde_json::json!({
            "generator": "folio-docgen v0.1",
            "seed": config.seed,
            "num_panels": config.num_panels,
        }),
        selectors: None,
        panels,
    }
}

fn generate_blocks(rng: &mut StdRng, config: &Config) -> Vec<String> {
    let num_blocks = rng.gen_range(config.blocks_min..=config.blocks_max);
    (0..num_blocks)
        .map(|_| {
            let num_words = rng.gen_range(40..=120);
            let mut words = Vec::with_capacity(num_words);
            for _ in 0..num_words {
                words.push(WORDS[rng.gen_range(0..WORDS.len())]);
            }
            let mut sentence = words.join(" ");
            sentence.push('.');
            sentence[..1].to_uppercase() + &sentence[1..]
        })
        .collect()
}

fn generate_metrics(rng: &mut StdRng, topic: &str, max_metrics: usize) -> Vec<MetricBar> {
    let num_metrics = rng.gen_range(0..=max_metrics);
    (0..num_metrics)
        .map(|i| MetricBar {
            label: format!("{}: {}", topic, METRIC_NAMES[i % METRIC_NAMES.len()]),
            target_percent: rng.gen_range(5..=100) as f32,
        })
        .collect()
}
