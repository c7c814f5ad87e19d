use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One generated content item. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content_type: ContentType,
    pub description: String,
    pub full_text_content: String,
    pub image_url: String,
    pub url: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub related_entities: Vec<String>,
    pub brand_or_person: String,
    pub date_published: jiff::civil::Date,
    pub author: String,
    pub sentiment: Sentiment,
    pub ai_summary: String,
}

/// Every key a serialized [`ContentRecord`] carries, in order.
pub const FIELDS: [&str; 16] = [
    "id",
    "title",
    "slug",
    "content_type",
    "description",
    "full_text_content",
    "image_url",
    "url",
    "tags",
    "categories",
    "related_entities",
    "brand_or_person",
    "date_published",
    "author",
    "sentiment",
    "ai_summary",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContentType {
    Product,
    Campaign,
    Video,
    MusicRelease,
    BrandEndorsement,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Product => "product",
            ContentType::Campaign => "campaign",
            ContentType::Video => "video",
            ContentType::MusicRelease => "music_release",
            ContentType::BrandEndorsement => "brand_endorsement",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone label attached to a record. `Negative` is part of the consumer
/// schema even though no built-in seed group draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialize records the way the dataset file stores them: a pretty-printed
/// array with two-space indentation and non-ASCII text left unescaped.
pub fn to_pretty_json(records: &[ContentRecord]) -> Result<String, crate::error::CoreError> {
    Ok(serde_json::to_string_pretty(records)?)
}
