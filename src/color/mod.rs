use crate::renderer::cell::RgbColor;

/// Which gradient the intensity axis drives.
///
/// Owned by the app and passed into every render call; nothing else
/// mutates it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RenderMode {
    /// Intensity sweeps the HSV value channel, saturation pinned at 1.0.
    Light,
    /// Intensity sweeps the HSV saturation channel, value pinned at 1.0.
    Dark,
}

impl RenderMode {
    pub fn toggle(self) -> Self {
        match self {
            RenderMode::Light => RenderMode::Dark,
            RenderMode::Dark => RenderMode::Light,
        }
    }
}

/// Standard HSV sector conversion. `h` in degrees [0, 360), `s` and `v`
/// in [0, 1]; output channels in [0, 1].
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = h % 360.0;
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// Convert one (hue, intensity) sample for the given mode.
///
/// `intensity` must already be normalized to [0, 1]. Channels are quantized
/// by rounding to nearest, so full intensity at hue 0 is exactly (255, 0, 0).
pub fn convert(hue: f64, intensity: f64, mode: RenderMode) -> RgbColor {
    let (r, g, b) = match mode {
        RenderMode::Light => hsv_to_rgb(hue, 1.0, intensity),
        RenderMode::Dark => hsv_to_rgb(hue, intensity, 1.0),
    };
    RgbColor(quantize(r), quantize(g), quantize(b))
}

#[inline]
fn quantize(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{HUE_MAX, HUE_STEP, INTENSITY_MAX};

    #[test]
    fn test_toggle_pair_restores_mode() {
        assert_eq!(RenderMode::Light.toggle(), RenderMode::Dark);
        assert_eq!(RenderMode::Light.toggle().toggle(), RenderMode::Light);
        assert_eq!(RenderMode::Dark.toggle().toggle(), RenderMode::Dark);
    }

    #[test]
    fn test_full_intensity_is_pure_hue() {
        // Saturation and value both 1.0 regardless of mode.
        assert_eq!(convert(0.0, 1.0, RenderMode::Light), RgbColor(255, 0, 0));
        assert_eq!(convert(0.0, 1.0, RenderMode::Dark), RgbColor(255, 0, 0));
        assert_eq!(convert(120.0, 1.0, RenderMode::Light), RgbColor(0, 255, 0));
        assert_eq!(convert(240.0, 1.0, RenderMode::Dark), RgbColor(0, 0, 255));
    }

    #[test]
    fn test_zero_intensity_extremes() {
        // Value 0 is black; saturation 0 is white.
        assert_eq!(convert(0.0, 0.0, RenderMode::Light), RgbColor(0, 0, 0));
        assert_eq!(convert(180.0, 0.0, RenderMode::Dark), RgbColor(255, 255, 255));
    }

    #[test]
    fn test_channels_stay_in_range_over_sampled_grid() {
        for hue in (0..HUE_MAX).step_by(HUE_STEP as usize) {
            for i in 0..=INTENSITY_MAX {
                let intensity = i as f64 / INTENSITY_MAX as f64;
                for mode in [RenderMode::Light, RenderMode::Dark] {
                    let (r, g, b) = match mode {
                        RenderMode::Light => hsv_to_rgb(hue as f64, 1.0, intensity),
                        RenderMode::Dark => hsv_to_rgb(hue as f64, intensity, 1.0),
                    };
                    for ch in [r, g, b] {
                        assert!((0.0..=1.0).contains(&ch), "hue={} i={} ch={}", hue, i, ch);
                    }
                }
            }
        }
    }
}
