//! Color/power controller for the status LED.
//!
//! Owns the current color and power flag and keeps them consistent with
//! whatever [`LedBackend`] renders them. State is plain owned data; there
//! is no lock, so keep all calls in one logical context.

use crate::backend::LedBackend;
use crate::color::{Hsv, Rgb, hsv_to_rgb};
use crate::error::Error;

/// Current color and power of the LED.
///
/// `color` always holds the last requested color. Powering off blanks the
/// output but never touches the stored color, so power-off followed by
/// power-on reproduces it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedState {
    pub color: Rgb,
    pub power_on: bool,
}

/// The public color/power API, generic over the rendering backend.
pub struct LedController<B: LedBackend> {
    backend: B,
    state: LedState,
}

impl<B: LedBackend> LedController<B> {
    /// Create a controller around a backend. Starts black and powered off;
    /// no hardware is touched until [`Self::init`].
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: LedState::default(),
        }
    }

    /// Configure the backend's hardware resources.
    ///
    /// Leaves the stored state alone, whatever the outcome.
    pub fn init(&mut self) -> Result<(), Error> {
        self.backend.init()
    }

    /// Turn the LED output on or off.
    ///
    /// Turning on re-renders the stored color; turning off blanks the
    /// output without overwriting it. Safe to repeat.
    pub fn set_power(&mut self, on: bool) -> Result<(), Error> {
        self.state.power_on = on;
        if on {
            self.backend.render(self.state.color)
        } else {
            self.backend.blank()
        }
    }

    /// Store an HSV color, rendering it only while powered on.
    pub fn set_color_hsv(&mut self, color: Hsv) -> Result<(), Error> {
        self.set_color_rgb(hsv_to_rgb(color))
    }

    /// Store an RGB color, rendering it only while powered on.
    ///
    /// The state update lands before the hardware write, so on a write
    /// failure the stored color is already current and the next
    /// `set_power`/`set_color_*` call resynchronizes the hardware.
    pub fn set_color_rgb(&mut self, color: Rgb) -> Result<(), Error> {
        self.state.color = color;
        if self.state.power_on {
            self.backend.render(color)
        } else {
            Ok(())
        }
    }

    /// Current stored state.
    pub const fn state(&self) -> LedState {
        self.state
    }

    /// Access the backend, e.g. to reclaim the hardware.
    pub fn into_backend(self) -> B {
        self.backend
    }
}
