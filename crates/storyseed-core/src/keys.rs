//! Record id and asset URL conventions.
//!
//! Pure string functions. `domain` is the catalogue key of a domain
//! (e.g. "nike"), `label` the id label of a seed group (e.g. "product"),
//! and `index` the 1-based position of the seed within its group.

pub const IMAGE_HOST: &str = "https://example.com";

pub fn record_id(domain: &str, label: &str, index: usize) -> String {
    format!("{domain}-{label}-{index}")
}

pub fn image_url(domain: &str, label: &str, index: usize) -> String {
    format!("{IMAGE_HOST}/{domain}/{label}-{index}.jpg")
}
