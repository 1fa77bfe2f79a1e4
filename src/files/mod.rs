//! Storage key conventions.
//!
//! Transcripts are addressed by `/`-separated keys (`<account>/<user>-<session>.log`).
//! The submodules derive identity and output locations from those keys.

pub mod key;

pub use key::{file_stem, is_processed_key, output_key, DEFAULT_EXTENSION, DEFAULT_NAMESPACE};
