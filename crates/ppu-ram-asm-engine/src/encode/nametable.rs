use std::num::IntErrorKind;

use crate::error::{FormatError, FormatErrorReason};
use crate::parsing::{Section, SourceLine};

/// Tile indices per name table row. Must stay even: indices pack in pairs.
pub const NAMETABLE_ROW_WIDTH: usize = 20;

/// Rows per background (20x15 tiles).
pub const NAMETABLE_HEIGHT: usize = 15;

/// Words produced by one name table row.
pub const WORDS_PER_ROW: usize = NAMETABLE_ROW_WIDTH / 2;

/// Parses a name table line into its tile indices.
///
/// Returns `Ok(None)` for a blank line.
pub fn parse_nametable_row(line: &SourceLine) -> Result<Option<Vec<u8>>, FormatError> {
    let text = line.text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != NAMETABLE_ROW_WIDTH {
        return Err(FormatError::new(
            Section::Nametable,
            line,
            FormatErrorReason::TileCount {
                expected: NAMETABLE_ROW_WIDTH,
                actual: tokens.len(),
            },
        ));
    }

    tokens
        .into_iter()
        .map(parse_index)
        .collect::<Result<Vec<u8>, _>>()
        .map(Some)
        .map_err(|reason| FormatError::new(Section::Nametable, line, reason))
}

fn parse_index(token: &str) -> Result<u8, FormatErrorReason> {
    let out_of_range = || FormatErrorReason::IndexOutOfRange {
        token: token.to_string(),
    };

    match token.parse::<i64>() {
        Ok(value) => u8::try_from(value).map_err(|_| out_of_range()),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(out_of_range()),
            _ => Err(FormatErrorReason::NotAnInteger {
                token: token.to_string(),
            }),
        },
    }
}

/// Packs indices pairwise, first of each pair in the high byte.
pub fn pack_pairs(indices: &[u8]) -> impl Iterator<Item = u16> + '_ {
    indices
        .chunks_exact(2)
        .map(|pair| (u16::from(pair[0]) << 8) | u16::from(pair[1]))
}

/// Encodes every non-blank name table line into `WORDS_PER_ROW` words.
pub fn encode_nametables(lines: &[SourceLine]) -> Result<Vec<u16>, FormatError> {
    let mut out = Vec::with_capacity(lines.len() * WORDS_PER_ROW);
    for line in lines {
        if let Some(indices) = parse_nametable_row(line)? {
            out.extend(pack_pairs(&indices));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const MIXED_ROW: &str = "0 0 0 0 0 0 0 0 0 0 1 1 1 1 1 1 2 2 2 2";

    fn encode(texts: &[&str]) -> Result<Vec<u16>, FormatError> {
        let lines: Vec<_> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| SourceLine::new(i + 1, *t))
            .collect();
        encode_nametables(&lines)
    }

    fn row_of(token: &str) -> String {
        vec![token; NAMETABLE_ROW_WIDTH].join(" ")
    }

    #[test]
    fn packs_pairs_high_byte_first() {
        assert_eq!(
            encode(&[MIXED_ROW]).unwrap(),
            vec![
                0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0101, 0x0101, 0x0101, 0x0202, 0x0202
            ]
        );
    }

    #[test]
    fn pair_order_is_not_swapped() {
        let words = encode(&["1 2 255 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 171 205"]).unwrap();
        assert_eq!(words[0], 0x0102);
        assert_eq!(words[1], 0xFF00);
        assert_eq!(words[9], 0xABCD);
    }

    #[test]
    fn ten_words_per_non_blank_line() {
        let words = encode(&[MIXED_ROW, "", MIXED_ROW, "  \t", MIXED_ROW]).unwrap();
        assert_eq!(words.len(), 3 * WORDS_PER_ROW);
        assert_eq!(&words[10..20], &words[0..10]);
    }

    #[test]
    fn irregular_whitespace_between_tokens() {
        let spaced = "0 0 0 0 0 0 0 0 0 0  1 1 1 1 1 1\t2 2 2 2";
        assert_eq!(encode(&[spaced]).unwrap(), encode(&[MIXED_ROW]).unwrap());
    }

    #[test]
    fn plus_sign_is_accepted() {
        let words = encode(&[row_of("+7").as_str()]).unwrap();
        assert_eq!(words, vec![0x0707; WORDS_PER_ROW]);
    }

    #[rstest]
    #[case(19)]
    #[case(21)]
    #[case(1)]
    fn wrong_token_count_fails(#[case] count: usize) {
        let text = vec!["0"; count].join(" ");
        let err = encode(&[MIXED_ROW, text.as_str()]).unwrap_err();
        assert_eq!(err.section, Section::Nametable);
        assert_eq!(err.line_number, 2);
        assert_eq!(
            err.reason,
            FormatErrorReason::TileCount {
                expected: 20,
                actual: count
            }
        );
    }

    #[rstest]
    #[case("256")]
    #[case("-1")]
    #[case("99999999999999999999999")]
    fn out_of_range_fails(#[case] token: &str) {
        let err = encode(&[row_of(token).as_str()]).unwrap_err();
        assert_eq!(
            err.reason,
            FormatErrorReason::IndexOutOfRange {
                token: token.to_string()
            }
        );
    }

    #[rstest]
    #[case("a")]
    #[case("1.5")]
    #[case("0x1")]
    #[case("--1")]
    fn non_integer_fails(#[case] token: &str) {
        let err = encode(&[row_of(token).as_str()]).unwrap_err();
        assert_eq!(
            err.reason,
            FormatErrorReason::NotAnInteger {
                token: token.to_string()
            }
        );
    }

    #[test]
    fn boundary_values_are_accepted() {
        let words = encode(&[row_of("255").as_str()]).unwrap();
        assert_eq!(words, vec![0xFFFF; WORDS_PER_ROW]);
    }
}
