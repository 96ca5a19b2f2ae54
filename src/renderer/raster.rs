use crate::color::{convert, RenderMode};
use crate::shared::constants::{
    GRID_COLS, GRID_ROWS, HALF_BLOCK, HUE_MAX, HUE_STEP, INTENSITY_MAX, INTENSITY_STEP,
};

use super::cell::CellData;

/// One rendered frame of the color wheel: 25 rows of 180 half-block cells.
///
/// The grid size is fixed by the sampling steps, never by the viewport; the
/// viewport only decides how much of the frame is visible.
pub struct Frame {
    pub rows: Vec<Vec<CellData>>,
}

/// Sample the HSV space for the given mode.
///
/// Intensity descends from 50 in steps of 2; each terminal row composites
/// two adjacent samples, intensity `i` in the upper half (foreground) and
/// `i - 1` in the lower half (background), doubling the effective vertical
/// resolution.
pub fn render_grid(mode: RenderMode) -> Frame {
    let mut rows = Vec::with_capacity(GRID_ROWS);

    let mut i = INTENSITY_MAX;
    while i > 0 {
        let mut row = Vec::with_capacity(GRID_COLS);
        for hue in (0..HUE_MAX).step_by(HUE_STEP as usize) {
            let upper = convert(hue as f64, i as f64 / INTENSITY_MAX as f64, mode);
            let lower = convert(hue as f64, (i - 1) as f64 / INTENSITY_MAX as f64, mode);
            row.push(CellData {
                char: HALF_BLOCK,
                fg: upper,
                bg: lower,
            });
        }
        rows.push(row);
        i -= INTENSITY_STEP;
    }

    Frame { rows }
}
