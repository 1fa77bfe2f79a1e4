//! Control-sequence stripping.
//!
//! Terminal recordings carry colour codes, cursor movement, window-title
//! updates and bells interleaved with the printable text. All of them are
//! removed outright; nothing is interpreted.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::transform::Transform;

/// CSI (`0x9B` or `ESC [`), OSC (`ESC ]` up to `BEL` or `ESC \`) or a bare `BEL`.
const CONTROL_SEQUENCE_PATTERN: &str =
    r"(?:\x{9B}|\x1B\[)[0-?]*[ -/]*[@-~]|\x1B\].*?(?:\x07|\x1B\\)|\x07";

static CONTROL_SEQUENCE_REGEX: OnceLock<Regex> = OnceLock::new();

fn control_sequence_regex() -> &'static Regex {
    CONTROL_SEQUENCE_REGEX.get_or_init(|| {
        Regex::new(CONTROL_SEQUENCE_PATTERN).expect("Invalid control sequence regex")
    })
}

/// Remove every CSI, OSC and bell sequence from `text` in a single pass.
///
/// An OSC sequence that never reaches its terminator is left in place.
pub fn strip_control_sequences(text: &str) -> String {
    control_sequence_regex().replace_all(text, "").into_owned()
}

/// Stripping stage of the cleaning pipeline.
///
/// Wraps [`strip_control_sequences`] and counts how many sequences were
/// removed, for diagnostics.
#[derive(Debug, Default)]
pub struct ControlStripper {
    sequences_stripped: usize,
}

impl ControlStripper {
    /// Create a new stripper with zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the count of control sequences stripped so far.
    pub fn sequences_stripped(&self) -> usize {
        self.sequences_stripped
    }
}

impl Transform for ControlStripper {
    fn transform(&mut self, text: &mut String) {
        let mut stripped = 0;
        let cleaned = control_sequence_regex()
            .replace_all(text, |_: &Captures<'_>| {
                stripped += 1;
                ""
            })
            .into_owned();
        self.sequences_stripped += stripped;
        *text = cleaned;
    }
}
