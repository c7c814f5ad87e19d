use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::record::{ContentRecord, ContentType, Sentiment};

/// Record counts broken down by brand, content type and sentiment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentStats {
    pub total: usize,
    pub by_brand: BTreeMap<String, usize>,
    pub by_type: BTreeMap<ContentType, usize>,
    pub by_sentiment: BTreeMap<Sentiment, usize>,
}

impl ContentStats {
    pub fn from_records(records: &[ContentRecord]) -> Self {
        let mut stats = ContentStats {
            total: records.len(),
            ..Default::default()
        };
        for record in records {
            *stats
                .by_brand
                .entry(record.brand_or_person.clone())
                .or_default() += 1;
            *stats.by_type.entry(record.content_type).or_default() += 1;
            *stats.by_sentiment.entry(record.sentiment).or_default() += 1;
        }
        stats
    }
}
