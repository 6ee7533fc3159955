//! # Source Parsing
//!
//! Splits assembler source into its two sections.
//!
//! 1. **Lines** (`lines`): the rope is broken into numbered `SourceLine`s.
//! 2. **Classification** (`classify`): a `SectionClassifier` routes each line
//!    to the pattern or name table buffer, consuming the `nametables` sentinel.
//!
//! Blank lines are kept in place here. The encoders skip them.

pub mod classify;
pub mod lines;

use std::fmt;

use xi_rope::Rope;

pub use classify::{ClassifierState, LineClass, SENTINEL, SectionClassifier, is_sentinel};
pub use lines::{SourceLine, numbered_lines};

/// The section of the source a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Pattern,
    Nametable,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Pattern => f.write_str("pattern"),
            Section::Nametable => f.write_str("nametable"),
        }
    }
}

/// Source lines routed to their sections, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSource {
    pub pattern: Vec<SourceLine>,
    pub nametables: Vec<SourceLine>,
    /// Whether a sentinel line was seen at all.
    pub has_sentinel: bool,
}

pub fn split_sections(rope: &Rope) -> SplitSource {
    let mut classifier = SectionClassifier::new();
    let mut split = SplitSource::default();

    for line in numbered_lines(rope) {
        match classifier.classify(&line) {
            LineClass::Sentinel => split.has_sentinel = true,
            LineClass::Data(Section::Pattern) => split.pattern.push(line),
            LineClass::Data(Section::Nametable) => split.nametables.push(line),
        }
    }

    split
}
