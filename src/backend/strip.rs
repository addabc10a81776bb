//! Addressable strip backend.
//!
//! Drives a single status pixel (or a short run of identical pixels) over
//! a [`SmartLedsWrite`] device. Device construction stays behind the
//! [`StripTransport`] seam so the RMT and SPI paths of the vendor driver,
//! and test fakes, plug in the same way.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::backend::LedBackend;
use crate::color::Rgb;
use crate::error::Error;

/// Channel order the strip expects on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    /// WS2812-style green-red-blue ordering.
    #[default]
    Grb,
    /// Plain red-green-blue ordering.
    Rgb,
}

/// Strip wiring description handed to the transport.
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    /// GPIO carrying the strip's data line.
    pub gpio: u8,
    /// Number of pixels driven with the status color.
    pub led_count: u16,
    /// On-wire channel order.
    pub color_order: ColorOrder,
}

impl StripConfig {
    /// Single status pixel on the given data pin, GRB order.
    pub const fn single_pixel(gpio: u8) -> Self {
        Self {
            gpio,
            led_count: 1,
            color_order: ColorOrder::Grb,
        }
    }
}

/// Constructs the strip device over whatever transport the platform has.
///
/// `create` may report success without producing a device; the backend
/// treats the missing handle as the authoritative failure signal.
pub trait StripTransport {
    type Writer: SmartLedsWrite<Color = Rgb>;

    /// Create the strip device for `config`.
    fn create(&mut self, config: &StripConfig) -> Result<Option<Self::Writer>, Error>;
}

/// Placeholder transport for targets with neither RMT nor SPI support.
pub struct NoTransport;

/// Writer type for [`NoTransport`]; never instantiated.
pub enum NeverStrip {}

impl SmartLedsWrite for NeverStrip {
    type Error = core::convert::Infallible;
    type Color = Rgb;

    fn write<T, I>(&mut self, _iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        match *self {}
    }
}

impl StripTransport for NoTransport {
    type Writer = NeverStrip;

    fn create(&mut self, _config: &StripConfig) -> Result<Option<Self::Writer>, Error> {
        Err(Error::BackendUnavailable)
    }
}

/// Renders the status color on an addressable strip.
pub struct StripBackend<T: StripTransport> {
    transport: T,
    config: StripConfig,
    strip: Option<T::Writer>,
}

impl<T: StripTransport> StripBackend<T> {
    /// Create a backend; the device itself is built during [`LedBackend::init`].
    pub const fn new(transport: T, config: StripConfig) -> Self {
        Self {
            transport,
            config,
            strip: None,
        }
    }

    fn fill(&mut self, color: Rgb) -> Result<(), Error> {
        let strip = self.strip.as_mut().ok_or(Error::DeviceCreationFailed)?;
        let pixels = core::iter::repeat_n(color, usize::from(self.config.led_count));
        // A single write latches the pixels; no separate refresh step.
        strip.write(pixels).map_err(|_| Error::TransportFailure)
    }
}

impl<T: StripTransport> LedBackend for StripBackend<T> {
    fn init(&mut self) -> Result<(), Error> {
        match self.transport.create(&self.config)? {
            Some(strip) => {
                self.strip = Some(strip);
                Ok(())
            }
            None => {
                // The transport claimed success but returned no handle.
                #[cfg(feature = "esp32-log")]
                println!("strip transport produced no device");
                Err(Error::DeviceCreationFailed)
            }
        }
    }

    fn render(&mut self, color: Rgb) -> Result<(), Error> {
        self.fill(color)
    }

    fn blank(&mut self) -> Result<(), Error> {
        self.fill(Rgb::default())
    }
}
