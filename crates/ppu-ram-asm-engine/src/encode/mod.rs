//! Word encoders for the two source sections.
//!
//! - **`pattern`**: one word per row and bit-plane, leftmost pixel in bit 15
//! - **`nametable`**: tile indices packed two per word, first index in the high byte

pub mod nametable;
pub mod pattern;

pub use nametable::{
    NAMETABLE_HEIGHT, NAMETABLE_ROW_WIDTH, WORDS_PER_ROW, encode_nametables, pack_pairs,
    parse_nametable_row,
};
pub use pattern::{
    PATTERN_ROW_WIDTH, PatternRow, Plane, SPRITE_HEIGHT, encode_plane, pack_plane,
    parse_pattern_row,
};
