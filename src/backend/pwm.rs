//! PWM backend for discrete RGB LEDs.
//!
//! One duty-cycle channel per color. Channel values are quantized to the
//! 13-bit duty grid the timer is expected to run at (5 kHz) and mapped
//! onto whatever resolution the hardware channel actually carries via
//! [`SetDutyCycle::set_duty_cycle_fraction`].

use embedded_hal::pwm::SetDutyCycle;

use crate::backend::LedBackend;
use crate::color::Rgb;
use crate::error::Error;

/// Duty resolution the quantization grid assumes.
pub const DUTY_RESOLUTION_BITS: u8 = 13;

/// Maximum duty value on the 13-bit grid.
pub const DUTY_MAX: u16 = (1 << DUTY_RESOLUTION_BITS) - 1;

/// PWM frequency the timer feeding the channels is expected to use.
pub const PWM_FREQUENCY_HZ: u32 = 5000;

/// Electrical polarity of the LED wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Higher duty means brighter (common cathode).
    ActiveHigh,
    /// Duty is inverted before the write (common anode).
    ActiveLow,
}

/// Renders colors on three PWM channels.
///
/// The channels arrive already bound to their GPIOs and timer; platform
/// code owns that setup. See [`PWM_FREQUENCY_HZ`] and
/// [`DUTY_RESOLUTION_BITS`] for the expected timer configuration.
pub struct PwmBackend<R, G, B> {
    red: R,
    green: G,
    blue: B,
    polarity: Polarity,
}

impl<R, G, B> PwmBackend<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Create a new PWM backend over three configured channels.
    pub const fn new(red: R, green: G, blue: B, polarity: Polarity) -> Self {
        Self {
            red,
            green,
            blue,
            polarity,
        }
    }

    fn write_all(&mut self, color: Rgb) -> Result<(), Error> {
        write_level(&mut self.red, color.r, self.polarity)?;
        write_level(&mut self.green, color.g, self.polarity)?;
        write_level(&mut self.blue, color.b, self.polarity)
    }
}

/// Quantize a channel value to the 13-bit duty grid.
#[allow(clippy::cast_possible_truncation)]
const fn level_to_duty(level: u8, polarity: Polarity) -> u16 {
    let duty = (level as u32 * DUTY_MAX as u32 / 255) as u16;
    match polarity {
        Polarity::ActiveHigh => duty,
        Polarity::ActiveLow => DUTY_MAX - duty,
    }
}

fn write_level(channel: &mut impl SetDutyCycle, level: u8, polarity: Polarity) -> Result<(), Error> {
    let duty = level_to_duty(level, polarity);
    channel
        .set_duty_cycle_fraction(duty, DUTY_MAX)
        .map_err(|_| Error::TransportFailure)
}

impl<R, G, B> LedBackend for PwmBackend<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Drive every channel to the blank level.
    ///
    /// The timer and channel binding is platform work done before
    /// construction; this write doubles as an early transport check.
    fn init(&mut self) -> Result<(), Error> {
        self.blank()
    }

    fn render(&mut self, color: Rgb) -> Result<(), Error> {
        self.write_all(color)
    }

    fn blank(&mut self) -> Result<(), Error> {
        self.write_all(Rgb::default())
    }
}
