//! storyseed-cli library root.
//!
//! Exposes the generation pipeline so integration tests can drive it
//! against a temporary directory without going through `main`.

pub mod config;
pub mod output;

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use storyseed_core::stats::ContentStats;
use storyseed_core::validate::validate_all;
use storyseed_synth::{Catalogue, Synthesizer};

use config::GeneratorConfig;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub path: PathBuf,
    pub seed: u64,
    pub stats: ContentStats,
}

/// Load the catalogue, synthesize every record, validate the set and write
/// it to the configured output path.
pub fn generate(config: &GeneratorConfig) -> eyre::Result<GenerationSummary> {
    let catalogue = match &config.catalogue {
        Some(path) => Catalogue::from_path(path)?,
        None => Catalogue::builtin()?,
    };
    let synth = Synthesizer::new(catalogue)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "seeding record synthesizer");
    let mut rng = StdRng::seed_from_u64(seed);

    let records = synth.synthesize(&mut rng)?;

    let report = validate_all(&records);
    for invalid in &report.errors {
        for issue in &invalid.issues {
            tracing::error!(id = %invalid.id, "{issue}");
        }
    }
    report.ensure_valid()?;

    let stats = ContentStats::from_records(&records);
    let by_brand = serde_json::to_string(&stats.by_brand)?;
    let by_type = serde_json::to_string(&stats.by_type)?;
    let by_sentiment = serde_json::to_string(&stats.by_sentiment)?;
    tracing::info!(
        total = stats.total,
        by_brand = %by_brand,
        by_type = %by_type,
        by_sentiment = %by_sentiment,
        "content stats"
    );

    output::write_records(&config.output, &records)?;

    Ok(GenerationSummary {
        path: config.output.clone(),
        seed,
        stats,
    })
}
