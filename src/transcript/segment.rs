//! Prompt-delimited command segmentation.
//!
//! A cleaned transcript is a run of lines where each shell prompt starts a
//! new command and every line until the next prompt is that command's
//! output. [`Segmenter`] walks the lines with an explicit two-state machine
//! and emits one [`CommandUnit`] per prompt.

use std::sync::OnceLock;

use regex::Regex;

/// Shell prompt shapes, tried as one leftmost-first alternation:
/// - `sh-4.2$` (optionally `sh-4.2(via ssm-agent-session)$`)
/// - `user@host:path$` or `user@host:path#`
/// - `[user@host dir]$` or `[user@host dir]#`
/// - a bare `$`
const PROMPT_PATTERN: &str =
    r"(sh-\d\.\d(?:\(via ssm-agent-session\))?\$|\S+@\S+:\S+[#$]|\[.+?@.+?\s.+?\][#$]|\$)\s?";

const SESSION_START_MARKER: &str = "Script started on";
const SESSION_END_MARKER: &str = "Script done on";

static PROMPT_REGEX: OnceLock<Regex> = OnceLock::new();

fn prompt_regex() -> &'static Regex {
    PROMPT_REGEX.get_or_init(|| Regex::new(PROMPT_PATTERN).expect("Invalid prompt regex"))
}

/// Characters that end a line: `\n`, `\r` (with `\r\n` as one break),
/// vertical tab, form feed, the file/group/record separators, NEL and the
/// Unicode line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Iterator over the lines of a transcript, see [`split_lines`].
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest;
        if rest.is_empty() {
            return None;
        }

        let Some((idx, c)) = rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            self.rest = "";
            return Some(rest);
        };
        let mut end = idx + c.len_utf8();
        if c == '\r' && rest[end..].starts_with('\n') {
            end += 1;
        }
        self.rest = &rest[end..];
        Some(&rest[..idx])
    }
}

/// Split `text` into lines on every line break character, not just `\n`.
///
/// A form feed inside command output ends a line like a newline does, so a
/// prompt printed after it is seen at the start of its own line. A trailing
/// break does not produce a final empty line.
///
/// ```
/// use scriptlog::transcript::split_lines;
///
/// let lines: Vec<&str> = split_lines("page1\x0c$ ls\r\nx\n").collect();
/// assert_eq!(lines, vec!["page1", "$ ls", "x"]);
/// ```
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

/// Return the text typed after the leftmost prompt on `line`, if any.
///
/// Everything up to and including the prompt (plus one optional whitespace
/// character) is discarded.
///
/// ```
/// use scriptlog::transcript::command_after_prompt;
///
/// assert_eq!(command_after_prompt("ubuntu@ip-10-0-0-1:~$ uptime"), Some("uptime"));
/// assert_eq!(command_after_prompt("no prompt here"), None);
/// ```
pub fn command_after_prompt(line: &str) -> Option<&str> {
    prompt_regex().find(line).map(|m| &line[m.end()..])
}

/// Whether `line` is a `script` session start or end banner.
pub fn is_session_marker(line: &str) -> bool {
    line.starts_with(SESSION_START_MARKER) || line.starts_with(SESSION_END_MARKER)
}

/// A command as typed after a prompt, plus the lines it printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandUnit {
    /// Raw text after the prompt (not yet trimmed)
    pub command: String,
    /// Output lines in order, verbatim
    pub output_lines: Vec<String>,
}

impl CommandUnit {
    /// Open a unit for `command` with no output yet.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            output_lines: Vec::new(),
        }
    }
}

/// Segmenter state: either before the first prompt, or collecting output
/// for the most recent one.
#[derive(Debug, Default)]
enum SegmenterState {
    #[default]
    NoOpenCommand,
    CommandOpen(CommandUnit),
}

/// Line-driven state machine splitting a cleaned transcript into commands.
///
/// # Example
///
/// ```
/// use scriptlog::transcript::Segmenter;
///
/// let mut segmenter = Segmenter::new();
/// for line in ["banner", "$ date", "Mon Jan 1", "$ exit"] {
///     segmenter.feed_line(line);
/// }
/// let units = segmenter.finish();
///
/// assert_eq!(units.len(), 2);
/// assert_eq!(units[0].command, "date");
/// assert_eq!(units[0].output_lines, vec!["Mon Jan 1"]);
/// ```
#[derive(Debug, Default)]
pub struct Segmenter {
    state: SegmenterState,
    finished: Vec<CommandUnit>,
    discarded_lines: usize,
}

impl Segmenter {
    /// Create a segmenter with no open command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state machine by one line (without its trailing `\n`).
    pub fn feed_line(&mut self, line: &str) {
        if is_session_marker(line) {
            return;
        }

        if let Some(command) = command_after_prompt(line) {
            let previous =
                std::mem::replace(&mut self.state, SegmenterState::CommandOpen(CommandUnit::new(command)));
            if let SegmenterState::CommandOpen(unit) = previous {
                self.finished.push(unit);
            }
            return;
        }

        match &mut self.state {
            SegmenterState::CommandOpen(unit) => unit.output_lines.push(line.to_string()),
            SegmenterState::NoOpenCommand => self.discarded_lines += 1,
        }
    }

    /// Feed every line of `text`, as split by [`split_lines`].
    pub fn feed_text(&mut self, text: &str) {
        for line in split_lines(text) {
            self.feed_line(line);
        }
    }

    /// Number of lines dropped because they came before the first prompt.
    pub fn discarded_lines(&self) -> usize {
        self.discarded_lines
    }

    /// Close any open command and return every unit in transcript order.
    pub fn finish(mut self) -> Vec<CommandUnit> {
        if let SegmenterState::CommandOpen(unit) = std::mem::take(&mut self.state) {
            self.finished.push(unit);
        }
        self.finished
    }
}

/// Split a cleaned transcript into command units.
pub fn segment_commands(cleaned: &str) -> Vec<CommandUnit> {
    let mut segmenter = Segmenter::new();
    segmenter.feed_text(cleaned);
    segmenter.finish()
}
