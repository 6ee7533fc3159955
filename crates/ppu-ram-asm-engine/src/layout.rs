/// Total addressable words of PPU RAM.
pub const PPU_RAM_WORDS: usize = 4096;

/// Base word addresses of the three memory image sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub plane0_base: u16,
    pub plane1_base: u16,
    pub nametable_base: u16,
}

impl Layout {
    /// The layout the PPU loads: plane 0 at word 0, plane 1 at word 1000,
    /// name tables at word 2000.
    pub const PPU_RAM: Layout = Layout {
        plane0_base: 0x000,
        plane1_base: 0x3E8,
        nametable_base: 0x7D0,
    };
}

impl Default for Layout {
    fn default() -> Self {
        Self::PPU_RAM
    }
}

/// Formats a base address as it appears in an `@ADDRESS` header.
///
/// Uppercase hex, no prefix, no padding.
pub fn address_label(address: u16) -> String {
    format!("{address:X}")
}
