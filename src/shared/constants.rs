pub const APP_NAME: &str = "huewheel";

pub const ERROR_LOG_FILE: &str = "error.log";
pub const DEBUG_LOG_FILE: &str = "debug.log";

/// Logical content size in character cells: 180 color columns plus the view
/// frame, 25 color rows plus caption lines plus the frame.
pub const LOGICAL_COLS: u16 = 182;
pub const LOGICAL_ROWS: u16 = 33;

/// Hue axis: [0, 360) sampled every 2 degrees.
pub const HUE_MAX: u32 = 360;
pub const HUE_STEP: u32 = 2;

/// Intensity axis: 50 down to 1, two samples per terminal row.
pub const INTENSITY_MAX: u32 = 50;
pub const INTENSITY_STEP: u32 = 2;

pub const GRID_COLS: usize = (HUE_MAX / HUE_STEP) as usize;
pub const GRID_ROWS: usize = (INTENSITY_MAX / INTENSITY_STEP) as usize;

/// Half-block glyph: upper half painted with the foreground color,
/// lower half with the background color.
pub const HALF_BLOCK: char = '▀';

pub const WHEEL_VIEW: &str = "wheel";
pub const FRAME_COLOR: &str = "#FFAA55";

pub const TOGGLE_KEY_LABEL: &str = "Ctrl + R - Switch light/dark mode";
pub const QUIT_KEY_LABEL: &str = "Ctrl + C - Exit";
