//! Status LED and push button support for dev boards.
//!
//! Two independent façades over platform drivers:
//!
//! - [`LedController`] — a color/power API for a single RGB status LED,
//!   generic over a [`LedBackend`] (3-channel PWM or a one-pixel
//!   addressable strip).
//! - [`button::init`] — wires short/long press callbacks into an external
//!   GPIO button driver with debouncing.
//!
//! The controller holds its state without locking. Call it from one
//! logical context only, or serialize access externally.
#![no_std]

pub mod backend;
pub mod button;
pub mod color;
pub mod controller;
pub mod error;

pub use backend::LedBackend;
pub use backend::pwm::{DUTY_MAX, DUTY_RESOLUTION_BITS, PWM_FREQUENCY_HZ, Polarity, PwmBackend};
pub use backend::strip::{ColorOrder, NoTransport, StripBackend, StripConfig, StripTransport};
pub use button::{ActiveLevel, Button, ButtonCallback, ButtonConfig, ButtonDriver, PressEvent};
pub use controller::{LedController, LedState};
pub use error::Error;

pub use color::{Hsv, Rgb, hsv_to_rgb};
