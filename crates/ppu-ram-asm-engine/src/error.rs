use thiserror::Error;

use crate::parsing::{Section, SourceLine};

/// A malformed line in the assembler source.
///
/// The first one found aborts assembly. It carries enough context to locate
/// the offending line: the section, the 1-based line number and the trimmed
/// line text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{section} line {line_number}: {reason} (line: {content:?})")]
pub struct FormatError {
    pub section: Section,
    pub line_number: usize,
    pub content: String,
    pub reason: FormatErrorReason,
}

impl FormatError {
    pub fn new(section: Section, line: &SourceLine, reason: FormatErrorReason) -> Self {
        Self {
            section,
            line_number: line.number,
            content: line.text.trim().to_string(),
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorReason {
    #[error("pattern line must be exactly {expected} digits, got {actual}")]
    PatternLength { expected: usize, actual: usize },

    #[error("invalid pixel value {found:?} at column {column} (must be 0-3)")]
    PixelValue { found: char, column: usize },

    #[error("name table line must have exactly {expected} indices, got {actual}")]
    TileCount { expected: usize, actual: usize },

    #[error("name table index {token:?} is not an integer")]
    NotAnInteger { token: String },

    #[error("name table index out of range (0-255): {token}")]
    IndexOutOfRange { token: String },
}
