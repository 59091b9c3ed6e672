//! Test doubles shared by the unit tests.

use core::cell::Cell;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sensor::{Channel, Device, Sensor, SensorError, SensorValue};

// =============================================================================
// Scripted Sensor
// =============================================================================

/// Sensor whose next reading and failures are set by the test.
pub struct ScriptedSensor {
    ready: bool,
    current: (SensorValue, SensorValue),
    latched: Option<(SensorValue, SensorValue)>,
    next_fetch_error: Option<SensorError>,
    channel_error: Option<(Channel, SensorError)>,
    fetches: u32,
    channel_reads: Cell<u32>,
}

impl ScriptedSensor {
    pub fn new() -> Self {
        Self {
            ready: true,
            current: (SensorValue::ZERO, SensorValue::ZERO),
            latched: None,
            next_fetch_error: None,
            channel_error: None,
            fetches: 0,
            channel_reads: Cell::new(0),
        }
    }

    pub fn offline() -> Self {
        Self {
            ready: false,
            ..Self::new()
        }
    }

    /// Value returned by the next successful fetch.
    pub fn set_reading(
        &mut self,
        temperature: f32,
        humidity: f32,
    ) {
        self.current = (SensorValue::from_f32(temperature), SensorValue::from_f32(humidity));
    }

    pub fn fail_next_fetch(
        &mut self,
        error: SensorError,
    ) {
        self.next_fetch_error = Some(error);
    }

    pub fn fail_channel(
        &mut self,
        channel: Channel,
        error: SensorError,
    ) {
        self.channel_error = Some((channel, error));
    }

    pub fn fetches(&self) -> u32 { self.fetches }

    pub fn channel_reads(&self) -> u32 { self.channel_reads.get() }
}

impl Device for ScriptedSensor {
    fn name(&self) -> &'static str { "scripted" }

    fn is_ready(&self) -> bool { self.ready }
}

impl Sensor for ScriptedSensor {
    fn sample_fetch(&mut self) -> Result<(), SensorError> {
        self.fetches += 1;
        if let Some(error) = self.next_fetch_error.take() {
            return Err(error);
        }
        self.latched = Some(self.current);
        Ok(())
    }

    fn channel_get(
        &self,
        channel: Channel,
    ) -> Result<SensorValue, SensorError> {
        self.channel_reads.set(self.channel_reads.get() + 1);
        if let Some((failing, error)) = self.channel_error
            && failing == channel
        {
            return Err(error);
        }
        let (temperature, humidity) = self.latched.ok_or(SensorError::NotReady)?;
        Ok(match channel {
            Channel::AmbientTemp => temperature,
            Channel::Humidity => humidity,
        })
    }
}

// =============================================================================
// Frame Buffer
// =============================================================================

/// Screen-sized RGB565 buffer that counts pixel writes.
pub struct FrameBuffer {
    pixels: Vec<Rgb565>,
    writes: usize,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![Rgb565::BLACK; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            writes: 0,
        }
    }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Rgb565 {
        self.pixels[(y as u32 * SCREEN_WIDTH + x as u32) as usize]
    }

    /// Number of pixels of `color` inside `area`.
    pub fn count_in(
        &self,
        area: &Rectangle,
        color: Rgb565,
    ) -> usize {
        area.points()
            .filter(|p| self.bounding_box().contains(*p))
            .filter(|p| self.pixel(p.x, p.y) == color)
            .count()
    }

    /// Pixel writes since the last call.
    pub fn take_writes(&mut self) -> usize { core::mem::take(&mut self.writes) }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if self.bounding_box().contains(point) {
                let idx = (point.y as u32 * SCREEN_WIDTH + point.x as u32) as usize;
                self.pixels[idx] = color;
                self.writes += 1;
            }
        }
        Ok(())
    }
}
