use xi_rope::Rope;

/// A single line of assembler source together with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the input file.
    pub number: usize,
    /// The line text without its `\n` or `\r\n` terminator.
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Whether the line holds nothing but whitespace.
    ///
    /// Blank lines are kept by the classifier and skipped by the encoders.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Returns an iterator over the lines of the rope, numbered from 1.
///
/// Uses `lines_raw` so that a trailing newline does not yield an extra empty
/// line, then strips the terminator from each line.
pub fn numbered_lines(rope: &Rope) -> impl Iterator<Item = SourceLine> + '_ {
    rope.lines_raw(..).enumerate().map(|(idx, line)| SourceLine {
        number: idx + 1,
        text: line.trim_end_matches(['\r', '\n']).to_string(),
    })
}
