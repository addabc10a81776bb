//! Push button façade.
//!
//! Debouncing and press classification live in the platform's button
//! driver; this module only creates the device and registers whichever
//! callbacks the caller provided. Callbacks run in the driver's own
//! dispatch context, not the caller's.

use crate::error::Error;

/// Callback type for button press handlers.
pub type ButtonCallback = fn();

/// Electrical level that counts as "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// Press classifications the driver can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressEvent {
    /// One debounced press-and-release.
    SingleClick,
    /// Hold threshold crossed.
    LongPressStart,
}

/// Button wiring and handlers.
///
/// Either callback slot may stay empty, but a config with neither is
/// rejected as [`Error::InvalidArgument`].
#[derive(Debug, Clone, Copy)]
pub struct ButtonConfig {
    pub gpio: u8,
    pub active_level: ActiveLevel,
    pub on_short_press: Option<ButtonCallback>,
    pub on_long_press: Option<ButtonCallback>,
}

/// The external GPIO button driver.
///
/// `create` may report success without producing a handle; [`init`] treats
/// the missing handle as failure regardless.
pub trait ButtonDriver {
    type Handle;

    /// Create a debounced GPIO button device.
    fn create(&mut self, gpio: u8, active_level: ActiveLevel) -> Result<Option<Self::Handle>, Error>;

    /// Register a callback for one press classification.
    fn register(&mut self, handle: &mut Self::Handle, event: PressEvent, callback: ButtonCallback);
}

/// Keeps the driver's device handle alive.
pub struct Button<H> {
    handle: H,
}

impl<H> Button<H> {
    /// Give the device handle back to the caller.
    pub fn into_handle(self) -> H {
        self.handle
    }
}

/// Create the button device and register the configured callbacks.
pub fn init<D: ButtonDriver>(driver: &mut D, config: &ButtonConfig) -> Result<Button<D::Handle>, Error> {
    if config.on_short_press.is_none() && config.on_long_press.is_none() {
        return Err(Error::InvalidArgument);
    }

    let Some(mut handle) = driver.create(config.gpio, config.active_level)? else {
        return Err(Error::DeviceCreationFailed);
    };

    if let Some(callback) = config.on_short_press {
        driver.register(&mut handle, PressEvent::SingleClick, callback);
    }
    if let Some(callback) = config.on_long_press {
        driver.register(&mut handle, PressEvent::LongPressStart, callback);
    }

    Ok(Button { handle })
}
