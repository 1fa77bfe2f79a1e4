//! Clean command handler: print the visible text of a transcript.

use anyhow::Result;
use std::path::Path;

use scriptlog::transcript::{ControlStripper, LineReconstructor, Transform};

use super::read_transcript;

/// Counters reported by `clean --stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanStats {
    pub sequences_stripped: usize,
    pub lines_rewritten: usize,
}

/// Run both cleaning stages over `raw`, keeping their statistics.
pub fn clean_with_stats(raw: String) -> (String, CleanStats) {
    let mut text = raw;
    let mut stripper = ControlStripper::new();
    let mut reconstructor = LineReconstructor::new();
    stripper.transform(&mut text);
    reconstructor.transform(&mut text);

    let stats = CleanStats {
        sequences_stripped: stripper.sequences_stripped(),
        lines_rewritten: reconstructor.lines_rewritten(),
    };
    (text, stats)
}

/// Print the cleaned transcript to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &str, stats: bool) -> Result<()> {
    let raw = read_transcript(Path::new(file))?;
    let (cleaned, counters) = clean_with_stats(raw);

    print!("{}", cleaned);

    if stats {
        eprintln!(
            "Stripped {} control sequences, rewrote {} lines",
            counters.sequences_stripped, counters.lines_rewritten
        );
    }
    Ok(())
}
