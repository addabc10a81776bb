//! Hardware rendering backends for the status LED.
//!
//! The controller talks to a [`LedBackend`]; the two implementations here
//! cover discrete PWM-driven LEDs and one-pixel addressable strips.

pub mod pwm;
pub mod strip;

use crate::color::Rgb;
use crate::error::Error;

/// Abstract rendering path behind the color/power API.
///
/// Implement this trait to support different LED hardware. The controller
/// is generic over it, so tests can substitute a recording fake.
pub trait LedBackend {
    /// Configure the hardware resources the backend needs.
    fn init(&mut self) -> Result<(), Error>;

    /// Push a color to the hardware.
    fn render(&mut self, color: Rgb) -> Result<(), Error>;

    /// Drive the output dark without forgetting anything.
    fn blank(&mut self) -> Result<(), Error>;
}
