//! Assembles pattern table and name table source text into a PPU RAM hex image.
//!
//! Source is split at a `nametables` line. Rows before it are 16-pixel
//! pattern rows of digits 0-3, encoded into two bit-planes. Rows after it are
//! 20 tile indices each, packed two per word. The three word sequences are
//! written under fixed base addresses by [`hex::write_hex`].

pub mod encode;
pub mod error;
pub mod hex;
pub mod image;
pub mod io;
pub mod layout;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::{FormatError, FormatErrorReason};
pub use hex::{render_hex, write_hex};
pub use image::{ImageSummary, MemoryImage, SectionImage, assemble, assemble_rope};
pub use io::{IoError, read_source, write_image};
pub use layout::Layout;
pub use parsing::Section;
