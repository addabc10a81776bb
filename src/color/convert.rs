//! HSV to RGB conversion.
//!
//! Sector decomposition over the hue wheel. The arithmetic mixes f32
//! scaling with integer division and truncates toward zero at every cast;
//! hardware output depends on the exact channel values, so the order of
//! operations here is load-bearing.

use super::{Hsv, Rgb};

/// Convert an HSV color to its RGB rendering.
///
/// Pure and total: hue wraps modulo 360, saturation and brightness
/// saturate at 100.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_rgb(color: Hsv) -> Rgb {
    let h = color.hue % 360;
    let s = u16::from(color.saturation.min(100));
    let v = color.brightness.min(100);

    let rgb_max = (f32::from(v) * 2.55) as u16;
    let rgb_min = (f32::from(rgb_max * (100 - s)) / 100.0) as u16;

    let sector = h / 60;
    let diff = h % 60;

    // RGB adjustment amount by hue
    let rgb_adj = (rgb_max - rgb_min) * diff / 60;

    let (r, g, b) = match sector {
        0 => (rgb_max, rgb_min + rgb_adj, rgb_min),
        1 => (rgb_max - rgb_adj, rgb_max, rgb_min),
        2 => (rgb_min, rgb_max, rgb_min + rgb_adj),
        3 => (rgb_min, rgb_max - rgb_adj, rgb_max),
        4 => (rgb_min + rgb_adj, rgb_min, rgb_max),
        _ => (rgb_max, rgb_min, rgb_max - rgb_adj),
    };

    Rgb {
        r: r as u8,
        g: g as u8,
        b: b as u8,
    }
}
