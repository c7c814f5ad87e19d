use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("failed to read catalogue at {path}: {source}")]
    CatalogueRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("catalogue parse error: {0}")]
    CatalogueParse(#[from] serde_json::Error),

    #[error("duplicate domain key: {0}")]
    DuplicateDomain(String),

    #[error("duplicate group label '{label}' in domain '{domain}'")]
    DuplicateGroup { domain: String, label: String },

    #[error("domain and group label combinations share the record id prefix '{0}'")]
    DuplicateIdPrefix(String),

    #[error("group '{domain}/{label}' has an invalid offset range [{min}, {max}]")]
    InvalidOffsetRange {
        domain: String,
        label: String,
        min: u32,
        max: u32,
    },

    #[error("group '{domain}/{label}' has no values to choose from for '{set}'")]
    EmptyChoiceSet {
        domain: String,
        label: String,
        set: String,
    },

    #[error("seed '{title}' in group '{domain}/{label}' has no content and the group has no body template")]
    MissingBody {
        domain: String,
        label: String,
        title: String,
    },

    #[error("template parse error in '{name}': {message}")]
    TemplateParse { name: String, message: String },

    #[error("template rendering failed for '{name}': {message}")]
    TemplateRender { name: String, message: String },

    #[error("date arithmetic failed: {0}")]
    Date(#[from] jiff::Error),
}
