/// A 24-bit RGB color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RgbColor(pub u8, pub u8, pub u8);

/// A single character cell on the terminal.
///
/// TrueColor foreground/background pair; with the half-block glyph this
/// packs two vertically stacked color samples into one cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellData {
    pub char: char,
    pub fg: RgbColor,
    pub bg: RgbColor,
}

impl Default for CellData {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: RgbColor(0, 0, 0),
            bg: RgbColor(0, 0, 0),
        }
    }
}
