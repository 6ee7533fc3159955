use crate::error::{FormatError, FormatErrorReason};
use crate::parsing::{Section, SourceLine};

/// Pixels per pattern row. One row packs into one 16-bit word per plane.
pub const PATTERN_ROW_WIDTH: usize = 16;

/// Rows per sprite.
pub const SPRITE_HEIGHT: usize = 16;

/// One 2-bit pixel value (0-3) per column, leftmost first.
pub type PatternRow = [u8; PATTERN_ROW_WIDTH];

/// A bit-plane of the pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    /// Plane 0: the low bit of each pixel.
    Low,
    /// Plane 1: the high bit of each pixel.
    High,
}

impl Plane {
    #[inline]
    pub fn bit(self, pixel: u8) -> u16 {
        match self {
            Plane::Low => u16::from(pixel & 1),
            Plane::High => u16::from((pixel >> 1) & 1),
        }
    }
}

/// Parses a pattern line into its pixel values.
///
/// Returns `Ok(None)` for a blank line.
pub fn parse_pattern_row(line: &SourceLine) -> Result<Option<PatternRow>, FormatError> {
    let text = line.text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let err = |reason| FormatError::new(Section::Pattern, line, reason);

    let actual = text.chars().count();
    if actual != PATTERN_ROW_WIDTH {
        return Err(err(FormatErrorReason::PatternLength {
            expected: PATTERN_ROW_WIDTH,
            actual,
        }));
    }

    let mut row = [0u8; PATTERN_ROW_WIDTH];
    for (i, ch) in text.chars().enumerate() {
        row[i] = match ch {
            '0'..='3' => ch as u8 - b'0',
            _ => {
                return Err(err(FormatErrorReason::PixelValue {
                    found: ch,
                    column: i + 1,
                }));
            }
        };
    }

    Ok(Some(row))
}

/// Packs one plane of a row into a word. The leftmost pixel lands in bit 15.
pub fn pack_plane(row: &PatternRow, plane: Plane) -> u16 {
    row.iter().enumerate().fold(0, |word, (i, &pixel)| {
        word | (plane.bit(pixel) << (PATTERN_ROW_WIDTH - 1 - i))
    })
}

/// Encodes every non-blank pattern line into one word of the given plane.
pub fn encode_plane(lines: &[SourceLine], plane: Plane) -> Result<Vec<u16>, FormatError> {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        if let Some(row) = parse_pattern_row(line)? {
            out.push(pack_plane(&row, plane));
        }
    }
    Ok(out)
}
