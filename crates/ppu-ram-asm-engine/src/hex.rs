//! Hex memory-image output.
//!
//! Each section is an `@ADDRESS` header line followed by one word per line
//! as four uppercase hex digits. Sections follow each other with no blank
//! line between them, and an empty section is just its header.

use std::fmt;
use std::io::{self, Write};

use crate::image::{MemoryImage, SectionImage};

impl fmt::Display for SectionImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@{}", self.label())?;
        for word in &self.words {
            writeln!(f, "{word:04X}")?;
        }
        Ok(())
    }
}

impl fmt::Display for MemoryImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in self.sections() {
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

/// Writes the image to `out` in hex format.
pub fn write_hex<W: Write>(image: &MemoryImage, out: &mut W) -> io::Result<()> {
    write!(out, "{image}")
}

/// Renders the image in hex format.
pub fn render_hex(image: &MemoryImage) -> String {
    image.to_string()
}
