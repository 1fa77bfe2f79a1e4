//! Carriage-return and backspace resolution.
//!
//! Shells redraw the command line in place while the user edits it, and
//! progress indicators rewrite their line with `\r`. A recording keeps every
//! intermediate state; this stage collapses each line to what was finally
//! visible on screen.

use super::transform::Transform;

const CARRIAGE_RETURN: char = '\r';
const BACKSPACE: char = '\x08';

/// Render a single line (no `\n`) to its final visible text.
///
/// Each `\r`-separated fragment overwrites the line from column 0 without
/// clearing what lies beyond it. Backspaces are then applied left to right,
/// each deleting the previously emitted character; a backspace at the start
/// of the line is a no-op.
///
/// ```
/// use scriptlog::transcript::render_line;
///
/// assert_eq!(render_line("abcdef\rXY"), "XYcdef");
/// assert_eq!(render_line("lss\x08 -la"), "ls -la");
/// ```
pub fn render_line(line: &str) -> String {
    let overwritten = line
        .split(CARRIAGE_RETURN)
        .fold(Vec::new(), |rendered: Vec<char>, fragment| {
            let mut next: Vec<char> = fragment.chars().collect();
            if rendered.len() > next.len() {
                next.extend_from_slice(&rendered[next.len()..]);
            }
            next
        });

    overwritten
        .into_iter()
        .fold(String::with_capacity(line.len()), |mut out, c| {
            if c == BACKSPACE {
                out.pop();
            } else {
                out.push(c);
            }
            out
        })
}

/// Render every `\n`-delimited line of `text`, preserving line order.
pub fn reconstruct_lines(text: &str) -> String {
    text.split('\n')
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn needs_rendering(line: &str) -> bool {
    line.contains([CARRIAGE_RETURN, BACKSPACE])
}

/// Line reconstruction stage of the cleaning pipeline.
#[derive(Debug, Default)]
pub struct LineReconstructor {
    lines_rewritten: usize,
}

impl LineReconstructor {
    /// Create a new reconstructor with zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines that contained `\r` or backspace and were rewritten.
    pub fn lines_rewritten(&self) -> usize {
        self.lines_rewritten
    }
}

impl Transform for LineReconstructor {
    fn transform(&mut self, text: &mut String) {
        self.lines_rewritten += text.split('\n').filter(|l| needs_rendering(l)).count();
        *text = reconstruct_lines(text);
    }
}
