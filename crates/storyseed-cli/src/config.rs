use std::env;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "mock_data.json";

pub const OUTPUT_VAR: &str = "STORYSEED_OUTPUT";
pub const SEED_VAR: &str = "STORYSEED_SEED";
pub const CATALOGUE_VAR: &str = "STORYSEED_CATALOGUE";
pub const LOG_FORMAT_VAR: &str = "STORYSEED_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Run configuration. Every setting has a default, so an empty
/// environment reproduces the plain `mock_data.json` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output: PathBuf,
    /// RNG seed. `None` draws a fresh one, which is logged so the run can
    /// be repeated.
    pub seed: Option<u64>,
    /// Catalogue file to load instead of the built-in one.
    pub catalogue: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
            catalogue: None,
            log_format: LogFormat::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let output = get(OUTPUT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let seed = get(SEED_VAR)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| eyre::eyre!("{SEED_VAR} must be an unsigned integer, got {raw:?}: {e}"))
            })
            .transpose()?;

        let log_format = match get(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(eyre::eyre!(
                    "{LOG_FORMAT_VAR} must be \"pretty\" or \"json\", got {other:?}"
                ));
            }
        };

        Ok(Self {
            output,
            seed,
            catalogue: get(CATALOGUE_VAR).map(PathBuf::from),
            log_format,
        })
    }
}
