mod convert;

pub use convert::hsv_to_rgb;
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Perceptual color input.
///
/// Hue wraps modulo 360; saturation and brightness are percentages and
/// values above 100 are treated as 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hsv {
    /// Hue angle, 0-360
    pub hue: u16,
    /// Saturation, 0-100
    pub saturation: u8,
    /// Brightness, 0-100
    pub brightness: u8,
}

impl Hsv {
    pub const fn new(hue: u16, saturation: u8, brightness: u8) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }
}
