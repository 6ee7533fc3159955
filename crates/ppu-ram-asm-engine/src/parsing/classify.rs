use log::{debug, warn};

use super::{Section, lines::SourceLine};

/// The line that separates pattern data from name table data.
///
/// Matched after trimming surrounding whitespace, ignoring case.
pub const SENTINEL: &str = "nametables";

/// State of the section classifier.
///
/// `ReadingPattern` is the initial state. The first sentinel line moves the
/// classifier to `ReadingNameTables`, which has no outgoing transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassifierState {
    #[default]
    ReadingPattern,
    ReadingNameTables,
}

/// Classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// The `nametables` marker. Consumed, never handed to an encoder.
    Sentinel,
    /// A line belonging to the given section (blank lines included).
    Data(Section),
}

/// Splits source lines into the pattern and name table sections.
#[derive(Debug, Default)]
pub struct SectionClassifier {
    state: ClassifierState,
}

impl SectionClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ClassifierState {
        self.state
    }

    /// Classifies a line, advancing the state machine on the sentinel.
    pub fn classify(&mut self, line: &SourceLine) -> LineClass {
        if is_sentinel(&line.text) {
            match self.state {
                ClassifierState::ReadingPattern => {
                    debug!("line {}: switching to name table section", line.number);
                    self.state = ClassifierState::ReadingNameTables;
                }
                ClassifierState::ReadingNameTables => {
                    warn!("line {}: repeated `{SENTINEL}` line ignored", line.number);
                }
            }
            return LineClass::Sentinel;
        }

        match self.state {
            ClassifierState::ReadingPattern => LineClass::Data(Section::Pattern),
            ClassifierState::ReadingNameTables => LineClass::Data(Section::Nametable),
        }
    }
}

/// Whether `text` is the section sentinel.
pub fn is_sentinel(text: &str) -> bool {
    text.trim().to_lowercase() == SENTINEL
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("nametables")]
    #[case("NameTables")]
    #[case("  NAMETABLES\t")]
    fn recognises_sentinel(#[case] text: &str) {
        assert!(is_sentinel(text));
    }

    #[rstest]
    #[case("nametables.")]
    #[case("name tables")]
    #[case("nametable")]
    #[case("")]
    #[case("0000000000000000")]
    fn rejects_non_sentinel(#[case] text: &str) {
        assert!(!is_sentinel(text));
    }

    #[test]
    fn starts_in_pattern_mode() {
        let mut classifier = SectionClassifier::new();
        assert_eq!(classifier.state(), ClassifierState::ReadingPattern);
        assert_eq!(
            classifier.classify(&SourceLine::new(1, "0123012301230123")),
            LineClass::Data(Section::Pattern)
        );
    }

    #[test]
    fn sentinel_switches_to_nametables_for_good() {
        let mut classifier = SectionClassifier::new();

        assert_eq!(
            classifier.classify(&SourceLine::new(1, "Nametables")),
            LineClass::Sentinel
        );
        assert_eq!(classifier.state(), ClassifierState::ReadingNameTables);

        assert_eq!(
            classifier.classify(&SourceLine::new(2, "0 1 2")),
            LineClass::Data(Section::Nametable)
        );
        assert_eq!(
            classifier.classify(&SourceLine::new(3, "nametables")),
            LineClass::Sentinel
        );
        assert_eq!(classifier.state(), ClassifierState::ReadingNameTables);
    }

    #[test]
    fn blank_lines_follow_current_section() {
        let mut classifier = SectionClassifier::new();
        assert_eq!(
            classifier.classify(&SourceLine::new(1, "")),
            LineClass::Data(Section::Pattern)
        );
        classifier.classify(&SourceLine::new(2, "nametables"));
        assert_eq!(
            classifier.classify(&SourceLine::new(3, "   ")),
            LineClass::Data(Section::Nametable)
        );
    }
}
