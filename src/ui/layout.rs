use crate::shared::constants::{LOGICAL_COLS, LOGICAL_ROWS};

/// The rectangle allocated to the wheel surface, in character cells.
///
/// Clamped to the smaller of the host terminal and the logical content
/// size. A degenerate host size passes through and yields a zero-area
/// surface, which draws as nothing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn from_host(cols: u16, rows: u16) -> Self {
        Self {
            width: cols.min(LOGICAL_COLS),
            height: rows.min(LOGICAL_ROWS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_host_passes_through() {
        let vp = Viewport::from_host(100, 10);
        assert_eq!((vp.width, vp.height), (100, 10));
    }

    #[test]
    fn test_large_host_clamps_to_logical_size() {
        let vp = Viewport::from_host(500, 500);
        assert_eq!((vp.width, vp.height), (182, 33));
    }

    #[test]
    fn test_mixed_axes_clamp_independently() {
        let vp = Viewport::from_host(500, 10);
        assert_eq!((vp.width, vp.height), (182, 10));
    }

    #[test]
    fn test_zero_host_is_zero_area() {
        let vp = Viewport::from_host(0, 0);
        assert_eq!((vp.width, vp.height), (0, 0));
    }
}
