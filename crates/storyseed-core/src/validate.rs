//! Schema checks run over generated records before they are written.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::error::CoreError;
use crate::models::record::ContentRecord;
use crate::slug::STRIPPED;

/// A single problem found on a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("{field} must be a valid http(s) URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("slug contains disallowed character {found:?}: {slug}")]
    InvalidSlug { slug: String, found: char },

    #[error("duplicate id, first seen at position {first_index}")]
    DuplicateId { first_index: usize },
}

/// Issues attached to one record, keyed by its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordIssues {
    pub id: String,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub total_items: usize,
    pub valid_items: usize,
    pub invalid_items: usize,
    pub errors: Vec<RecordIssues>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.invalid_items == 0
    }

    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CoreError::InvalidRecords {
                invalid: self.invalid_items,
                total: self.total_items,
            })
        }
    }
}

/// Check a single record in isolation.
pub fn validate_record(record: &ContentRecord) -> Vec<ValidationIssue> {
    let required: [(&'static str, &str); 10] = [
        ("id", record.id.as_str()),
        ("title", record.title.as_str()),
        ("slug", record.slug.as_str()),
        ("description", record.description.as_str()),
        ("full_text_content", record.full_text_content.as_str()),
        ("image_url", record.image_url.as_str()),
        ("url", record.url.as_str()),
        ("brand_or_person", record.brand_or_person.as_str()),
        ("author", record.author.as_str()),
        ("ai_summary", record.ai_summary.as_str()),
    ];

    let mut issues: Vec<ValidationIssue> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|&(field, _)| ValidationIssue::MissingField { field })
        .collect();

    for (field, value) in [("url", &record.url), ("image_url", &record.image_url)] {
        if !value.is_empty() && !is_web_url(value) {
            issues.push(ValidationIssue::InvalidUrl {
                field,
                value: value.clone(),
            });
        }
    }

    if let Some(found) = record
        .slug
        .chars()
        .find(|c| *c == ' ' || STRIPPED.contains(c))
    {
        issues.push(ValidationIssue::InvalidSlug {
            slug: record.slug.clone(),
            found,
        });
    }

    issues
}

/// Check every record, plus id uniqueness across the whole set.
pub fn validate_all(records: &[ContentRecord]) -> ValidationReport {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut errors = Vec::new();

    for (position, record) in records.iter().enumerate() {
        let mut issues = validate_record(record);
        if let Some(&first_index) = first_seen.get(record.id.as_str()) {
            issues.push(ValidationIssue::DuplicateId { first_index });
        } else {
            first_seen.insert(&record.id, position);
        }

        if !issues.is_empty() {
            errors.push(RecordIssues {
                id: record.id.clone(),
                issues,
            });
        }
    }

    ValidationReport {
        total_items: records.len(),
        valid_items: records.len() - errors.len(),
        invalid_items: errors.len(),
        errors,
    }
}

fn is_web_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}
