use std::fmt::Write;

use crate::shared::constants::{QUIT_KEY_LABEL, TOGGLE_KEY_LABEL};

use super::raster::Frame;

// ~40 bytes of escapes per cell; sizing the buffer up front keeps the
// frame build to a single allocation.
const CELL_BYTES: usize = 48;

/// Serialize a frame into one flat string of truecolor escape sequences.
///
/// The color/compositing decision lives in the rasterizer; this stage only
/// encodes it, so a different terminal capability model could swap the
/// encoder without touching the color math.
pub fn encode(frame: &Frame) -> String {
    let cells: usize = frame.rows.iter().map(|r| r.len()).sum();
    let mut out = String::with_capacity(cells * CELL_BYTES + 256);

    for row in &frame.rows {
        for cell in row {
            // BG first, then FG, glyph, reset: \x1b[48;2;R;G;Bm\x1b[38;2;R;G;Bm▀\x1b[0m
            let _ = write!(
                out,
                "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{}\x1b[0m",
                cell.bg.0, cell.bg.1, cell.bg.2, cell.fg.0, cell.fg.1, cell.fg.2, cell.char,
            );
        }
        out.push('\n');
    }

    push_captions(&mut out);
    out
}

/// Key hints and the truecolor note, dimmed with a 256-color gray so they
/// read as chrome rather than content.
fn push_captions(out: &mut String) {
    out.push('\n');
    out.push_str("\x1b[38;5;245m");
    out.push_str(TOGGLE_KEY_LABEL);
    out.push_str("\n\n");
    out.push_str(QUIT_KEY_LABEL);
    out.push_str("\n\n");
    out.push_str("Needs true color; if it looks wrong run this first: \x1b[0mexport COLORTERM=truecolor");
}
