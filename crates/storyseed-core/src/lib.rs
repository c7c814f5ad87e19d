//! storyseed-core
//!
//! Pure domain types for the generated content dataset: the record schema,
//! slug and id conventions, validation, and summary statistics.
//! No I/O. This is the shared vocabulary of the storyseed crates.

pub mod error;
pub mod keys;
pub mod models;
pub mod slug;
pub mod stats;
pub mod validate;
