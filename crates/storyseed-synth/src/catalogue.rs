//! Seed catalogue: the literal fixture data records are derived from.
//!
//! The built-in catalogue lives in `data/catalogue.json` and is embedded at
//! build time. A catalogue with the same shape can be loaded from disk.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use storyseed_core::models::record::{ContentType, Sentiment};

use crate::error::SynthError;

const BUILTIN: &str = include_str!("../data/catalogue.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogue {
    pub domains: Vec<DomainSeed>,
}

/// One topic domain. Its records are emitted together, group by group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainSeed {
    /// Lowercase key used in record ids and image URLs (e.g. "nike").
    pub key: String,
    pub brand_or_person: String,
    /// Publication dates are drawn backwards from this date.
    pub base_date: jiff::civil::Date,
    pub groups: Vec<SeedGroup>,
}

/// Seeds of one domain that share a content type, date range and templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedGroup {
    /// Id label, e.g. "music" for `blackpink-music-1`.
    pub label: String,
    pub content_type: ContentType,
    pub offset_days: OffsetRange,
    /// Tera template for the canonical URL.
    pub url: String,
    /// Appended after each seed's own tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Appended after each seed's own categories.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub related_entities: Vec<String>,
    pub author: String,
    pub sentiments: Vec<Sentiment>,
    /// Named phrase sets; one value of each is drawn per record and exposed
    /// to the templates under its name.
    #[serde(default)]
    pub choices: BTreeMap<String, Vec<String>>,
    /// Tera template for `full_text_content`, used when a seed has no
    /// literal content.
    #[serde(default)]
    pub body: Option<String>,
    /// Tera template for `ai_summary`.
    pub summary: String,
    pub seeds: Vec<Seed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Largest day count a `jiff::Span` can hold.
pub const MAX_OFFSET_DAYS: u32 = 7_304_484;

/// Closed range of days subtracted from a domain's base date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetRange {
    pub min: u32,
    pub max: u32,
}

impl OffsetRange {
    pub fn contains(&self, days: u32) -> bool {
        (self.min..=self.max).contains(&days)
    }
}

impl Catalogue {
    pub fn builtin() -> Result<Self, SynthError> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(json: &str) -> Result<Self, SynthError> {
        let catalogue: Catalogue = serde_json::from_str(json)?;
        catalogue.validate()?;
        Ok(catalogue)
    }

    pub fn from_path(path: &Path) -> Result<Self, SynthError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SynthError::CatalogueRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded catalogue file");
        Self::from_json(&contents)
    }

    /// Total number of seeds, which is also the number of records produced.
    pub fn seed_count(&self) -> usize {
        self.groups().map(|(_, group)| group.seeds.len()).sum()
    }

    /// All groups in emission order, paired with their domain.
    pub fn groups(&self) -> impl Iterator<Item = (&DomainSeed, &SeedGroup)> {
        self.domains
            .iter()
            .flat_map(|domain| domain.groups.iter().map(move |group| (domain, group)))
    }

    /// Structural checks run before synthesis. Template rendering and date
    /// arithmetic can still fail afterwards.
    pub fn validate(&self) -> Result<(), SynthError> {
        let mut domain_keys = HashSet::new();
        let mut id_prefixes = HashSet::new();
        for domain in &self.domains {
            if !domain_keys.insert(domain.key.as_str()) {
                return Err(SynthError::DuplicateDomain(domain.key.clone()));
            }

            let mut labels = HashSet::new();
            for group in &domain.groups {
                if !labels.insert(group.label.as_str()) {
                    return Err(SynthError::DuplicateGroup {
                        domain: domain.key.clone(),
                        label: group.label.clone(),
                    });
                }
                // "a-b"/"c" and "a"/"b-c" would both emit "a-b-c-1".
                let prefix = format!("{}-{}", domain.key, group.label);
                if !id_prefixes.insert(prefix.clone()) {
                    return Err(SynthError::DuplicateIdPrefix(prefix));
                }
                validate_group(&domain.key, group)?;
            }
        }
        Ok(())
    }
}

fn validate_group(domain: &str, group: &SeedGroup) -> Result<(), SynthError> {
    let range = group.offset_days;
    if range.min > range.max || range.max > MAX_OFFSET_DAYS {
        return Err(SynthError::InvalidOffsetRange {
            domain: domain.to_string(),
            label: group.label.clone(),
            min: range.min,
            max: range.max,
        });
    }

    let empty_set = if group.sentiments.is_empty() {
        Some("sentiments")
    } else {
        group
            .choices
            .iter()
            .find(|(_, values)| values.is_empty())
            .map(|(name, _)| name.as_str())
    };
    if let Some(set) = empty_set {
        return Err(SynthError::EmptyChoiceSet {
            domain: domain.to_string(),
            label: group.label.clone(),
            set: set.to_string(),
        });
    }

    if group.body.is_none()
        && let Some(seed) = group.seeds.iter().find(|s| s.content.is_none())
    {
        return Err(SynthError::MissingBody {
            domain: domain.to_string(),
            label: group.label.clone(),
            title: seed.title.clone(),
        });
    }

    Ok(())
}
