use log::{debug, warn};
use xi_rope::Rope;

use crate::encode::{
    NAMETABLE_HEIGHT, Plane, SPRITE_HEIGHT, WORDS_PER_ROW, encode_nametables, encode_plane,
};
use crate::error::FormatError;
use crate::layout::{Layout, PPU_RAM_WORDS, address_label};
use crate::parsing::split_sections;

/// An address-tagged run of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionImage {
    pub base: u16,
    pub words: Vec<u16>,
}

impl SectionImage {
    pub fn new(base: u16, words: Vec<u16>) -> Self {
        Self { base, words }
    }

    pub fn label(&self) -> String {
        address_label(self.base)
    }

    /// One past the last word address this section occupies.
    pub fn end(&self) -> usize {
        usize::from(self.base) + self.words.len()
    }
}

/// The assembled contents of PPU RAM, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryImage {
    pub plane0: SectionImage,
    pub plane1: SectionImage,
    pub nametables: SectionImage,
}

impl MemoryImage {
    pub fn sections(&self) -> [&SectionImage; 3] {
        [&self.plane0, &self.plane1, &self.nametables]
    }

    pub fn summary(&self) -> ImageSummary {
        let pattern_rows = self.plane0.words.len();
        let nametable_rows = self.nametables.words.len() / WORDS_PER_ROW;
        ImageSummary {
            plane0_words: pattern_rows,
            plane1_words: self.plane1.words.len(),
            nametable_words: self.nametables.words.len(),
            sprites: pattern_rows / SPRITE_HEIGHT,
            backgrounds: nametable_rows / NAMETABLE_HEIGHT,
        }
    }
}

/// Word and object counts for an assembled image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSummary {
    pub plane0_words: usize,
    pub plane1_words: usize,
    pub nametable_words: usize,
    /// Whole sprites: pattern rows / `SPRITE_HEIGHT`.
    pub sprites: usize,
    /// Whole backgrounds: name table rows / `NAMETABLE_HEIGHT`.
    pub backgrounds: usize,
}

/// Assembles source text into a memory image.
///
/// Nothing is produced unless every line encodes. The first malformed line
/// is returned as a [`FormatError`].
pub fn assemble(source: &str, layout: &Layout) -> Result<MemoryImage, FormatError> {
    assemble_rope(&Rope::from(source), layout)
}

pub fn assemble_rope(rope: &Rope, layout: &Layout) -> Result<MemoryImage, FormatError> {
    let split = split_sections(rope);
    if !split.has_sentinel {
        warn!("no `nametables` line; treating the whole source as pattern data");
    }
    debug!(
        "classified {} pattern lines and {} name table lines",
        split.pattern.len(),
        split.nametables.len()
    );

    let plane0 = encode_plane(&split.pattern, Plane::Low)?;
    let plane1 = encode_plane(&split.pattern, Plane::High)?;
    let nametables = encode_nametables(&split.nametables)?;

    let image = MemoryImage {
        plane0: SectionImage::new(layout.plane0_base, plane0),
        plane1: SectionImage::new(layout.plane1_base, plane1),
        nametables: SectionImage::new(layout.nametable_base, nametables),
    };

    for section in image.sections() {
        debug!("@{}: {} words", section.label(), section.words.len());
    }
    warn_on_irregular_counts(&image);
    warn_on_overlap(&image);

    Ok(image)
}

fn warn_on_irregular_counts(image: &MemoryImage) {
    let pattern_rows = image.plane0.words.len();
    if pattern_rows % SPRITE_HEIGHT != 0 {
        warn!(
            "{pattern_rows} pattern rows is not a whole number of {SPRITE_HEIGHT}-row sprites"
        );
    }

    let nametable_rows = image.nametables.words.len() / WORDS_PER_ROW;
    if nametable_rows % NAMETABLE_HEIGHT != 0 {
        warn!(
            "{nametable_rows} name table rows is not a whole number of \
             {NAMETABLE_HEIGHT}-row backgrounds"
        );
    }
}

fn warn_on_overlap(image: &MemoryImage) {
    let sections = image.sections();
    for pair in sections.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if next.base > current.base && current.end() > usize::from(next.base) {
            warn!(
                "section @{} runs into section @{} ({} words past its base)",
                current.label(),
                next.label(),
                current.end() - usize::from(next.base)
            );
        }
    }

    for section in sections {
        if section.end() > PPU_RAM_WORDS {
            warn!(
                "section @{} ends at word {:#X}, past the end of PPU RAM",
                section.label(),
                section.end()
            );
        }
    }
}
