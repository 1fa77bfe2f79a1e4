//! Transcript cleaning and command segmentation.
//!
//! This is the core of scriptlog: a pure transformation from the raw text of
//! a `script`-style terminal recording to an ordered list of [`Record`]s.
//!
//! # Pipeline
//!
//! 1. [`ControlStripper`] removes CSI, OSC and bell sequences
//! 2. [`LineReconstructor`] resolves `\r` overwrites and backspaces per line
//! 3. [`SessionMetadata::extract`] finds the start time and instance id
//! 4. [`Segmenter`] splits lines into prompt-delimited [`CommandUnit`]s
//! 5. [`build_records`] filters units and attaches metadata and [`Identity`]
//!
//! Steps 1 and 2 are [`Transform`]s composed by [`cleaning_chain`].
//!
//! # Module Structure
//!
//! - [`transform`] - The text transform trait and chain
//! - [`strip`] - Control-sequence stripping
//! - [`line`] - Carriage-return and backspace resolution
//! - [`metadata`] - Start time and instance id extraction
//! - [`segment`] - Prompt detection and the segmentation state machine
//! - [`record`] - Record construction and filtering

pub mod line;
pub mod metadata;
pub mod record;
pub mod segment;
pub mod strip;
pub mod transform;

pub use line::{reconstruct_lines, render_line, LineReconstructor};
pub use metadata::SessionMetadata;
pub use record::{build_record, build_records, Identity, Record, INSTANCE_ID_SENTINEL};
pub use segment::{
    command_after_prompt, segment_commands, split_lines, CommandUnit, Segmenter, SplitLines,
};
pub use strip::{strip_control_sequences, ControlStripper};
pub use transform::{Transform, TransformChain};

use tracing::debug;

/// Placeholder for any metadata or identity field that could not be found.
pub const UNKNOWN: &str = "unknown";

/// Decode raw transcript bytes as UTF-8, dropping invalid sequences.
///
/// Unlike [`String::from_utf8_lossy`] nothing is substituted: undecodable
/// bytes simply disappear from the text.
pub fn decode_lossy(mut bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                text.push_str(valid);
                return text;
            }
            Err(err) => {
                let (valid, rest) = bytes.split_at(err.valid_up_to());
                text.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let skip = err.error_len().unwrap_or(rest.len());
                bytes = &rest[skip..];
            }
        }
    }
}

/// The default cleaning pipeline: strip control sequences, then rebuild lines.
pub fn cleaning_chain() -> TransformChain {
    TransformChain::new()
        .with(ControlStripper::new())
        .with(LineReconstructor::new())
}

/// Clean a raw transcript into the text that was visible on screen.
pub fn clean_transcript(raw: &str) -> String {
    let mut text = raw.to_string();
    cleaning_chain().transform(&mut text);
    text
}

/// Result of parsing one transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTranscript {
    pub metadata: SessionMetadata,
    pub records: Vec<Record>,
}

/// Run the full pipeline over a raw transcript.
///
/// Never fails: unrecognized sequences pass through, missing metadata is
/// `"unknown"`, and a transcript without prompts yields no records.
pub fn parse_transcript(raw: &str, identity: &Identity) -> ParsedTranscript {
    let cleaned = clean_transcript(raw);
    let metadata = SessionMetadata::extract(&cleaned);

    let mut segmenter = Segmenter::new();
    segmenter.feed_text(&cleaned);
    let discarded = segmenter.discarded_lines();
    let units = segmenter.finish();
    let records = build_records(&units, &metadata, identity);

    debug!(
        units = units.len(),
        records = records.len(),
        discarded_lines = discarded,
        start_time = %metadata.start_time,
        instance_id = %metadata.instance_id,
        "Parsed transcript"
    );

    ParsedTranscript { metadata, records }
}
