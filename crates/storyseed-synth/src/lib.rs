//! storyseed-synth
//!
//! The seed catalogue and the synthesizer that turns it into content
//! records. Randomness is injected by the caller, so a fixed seed gives
//! byte-identical output.

pub mod catalogue;
pub mod error;
pub mod render;
pub mod synthesize;

pub use catalogue::Catalogue;
pub use synthesize::Synthesizer;
