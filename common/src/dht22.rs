//! DHT22 (AM2302) samples and driver bookkeeping.
//!
//! Hardware reads go through the `dht22-sensor` driver, whose readings and
//! errors convert into [`Measurement`] and [`SensorError`] here. The raw
//! 5-byte frame codec is kept for simulated sensors, which transmit the same
//! frame the real part does:
//!
//! | Byte | Content |
//! |------|---------|
//! | 0-1  | Relative humidity × 10 |
//! | 2-3  | Temperature × 10, bit 15 = sign |
//! | 4    | Low byte of the sum of bytes 0-3 |

use dht22_sensor::{DhtError, Reading};

use crate::config::timing::DHT22_MIN_SAMPLE_INTERVAL_MS;
use crate::sensor::{Channel, SensorError, SensorValue};

/// Number of bytes in a frame.
pub const FRAME_LEN: usize = 5;

/// A raw 5-byte frame.
pub type Frame = [u8; FRAME_LEN];

/// One decoded temperature/humidity sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Temperature in °C.
    pub temperature: SensorValue,
    /// Relative humidity in %.
    pub humidity: SensorValue,
}

impl Measurement {
    /// Value of a single channel.
    pub const fn channel(
        &self,
        channel: Channel,
    ) -> SensorValue {
        match channel {
            Channel::AmbientTemp => self.temperature,
            Channel::Humidity => self.humidity,
        }
    }
}

impl From<Reading> for Measurement {
    /// The driver reports floats derived from tenths; round back to tenths.
    fn from(reading: Reading) -> Self {
        Self {
            temperature: SensorValue::from_deci(to_nearest_deci(reading.temperature)),
            humidity: SensorValue::from_deci(to_nearest_deci(reading.relative_humidity)),
        }
    }
}

impl<E> From<DhtError<E>> for SensorError {
    fn from(error: DhtError<E>) -> Self {
        match error {
            DhtError::Timeout => Self::Timeout,
            DhtError::ChecksumMismatch => Self::Checksum,
            DhtError::PinError(_) => Self::Io,
        }
    }
}

fn to_nearest_deci(value: f32) -> i32 {
    let deci = value * 10.0;
    (if deci < 0.0 { deci - 0.5 } else { deci + 0.5 }) as i32
}

/// Checksum over the four payload bytes.
#[inline]
pub const fn checksum(frame: &Frame) -> u8 {
    frame[0]
        .wrapping_add(frame[1])
        .wrapping_add(frame[2])
        .wrapping_add(frame[3])
}

/// Decode a frame into a measurement, verifying its checksum.
pub fn decode_frame(frame: &Frame) -> Result<Measurement, SensorError> {
    if checksum(frame) != frame[4] {
        return Err(SensorError::Checksum);
    }

    let humidity = u16::from_be_bytes([frame[0], frame[1]]);
    let raw_temp = u16::from_be_bytes([frame[2], frame[3]]);
    let magnitude = i32::from(raw_temp & 0x7FFF);
    let temperature = if raw_temp & 0x8000 != 0 { -magnitude } else { magnitude };

    Ok(Measurement {
        temperature: SensorValue::from_deci(temperature),
        humidity: SensorValue::from_deci(i32::from(humidity)),
    })
}

/// Encode a measurement the way the sensor transmits it.
///
/// Values are truncated to tenths. Used by simulated sensors.
pub fn encode_frame(measurement: &Measurement) -> Frame {
    let humidity = to_deci(measurement.humidity).clamp(0, 0xFFFF) as u16;
    let temp_deci = to_deci(measurement.temperature);
    let mut raw_temp = temp_deci.unsigned_abs().min(0x7FFF) as u16;
    if temp_deci < 0 {
        raw_temp |= 0x8000;
    }

    let [h_hi, h_lo] = humidity.to_be_bytes();
    let [t_hi, t_lo] = raw_temp.to_be_bytes();
    let mut frame = [h_hi, h_lo, t_hi, t_lo, 0];
    frame[4] = checksum(&frame);
    frame
}

const fn to_deci(value: SensorValue) -> i32 { value.integer * 10 + value.micro / 100_000 }

// =============================================================================
// Driver Bookkeeping
// =============================================================================

/// Sampling-interval guard and latched sample shared by DHT22 drivers.
pub struct Dht22State {
    last_fetch_ms: Option<u64>,
    latched: Option<Measurement>,
}

impl Dht22State {
    /// No fetch attempted yet, nothing latched.
    pub const fn new() -> Self {
        Self {
            last_fetch_ms: None,
            latched: None,
        }
    }

    /// Start a conversion at `now_ms` if the sampling interval allows it.
    ///
    /// Returns `Busy` when the previous attempt is less than
    /// [`DHT22_MIN_SAMPLE_INTERVAL_MS`] ago. Failed attempts count too.
    pub fn begin_fetch(
        &mut self,
        now_ms: u64,
    ) -> Result<(), SensorError> {
        if let Some(last) = self.last_fetch_ms
            && now_ms.saturating_sub(last) < DHT22_MIN_SAMPLE_INTERVAL_MS
        {
            return Err(SensorError::Busy);
        }
        self.last_fetch_ms = Some(now_ms);
        Ok(())
    }

    /// Latch the outcome of a conversion. Failures keep the previous sample.
    pub fn complete_fetch(
        &mut self,
        sample: Result<Measurement, SensorError>,
    ) -> Result<(), SensorError> {
        self.latched = Some(sample?);
        Ok(())
    }

    /// Read a channel of the latched sample.
    pub fn channel(
        &self,
        channel: Channel,
    ) -> Result<SensorValue, SensorError> {
        self.latched
            .map(|m| m.channel(channel))
            .ok_or(SensorError::NotReady)
    }
}

impl Default for Dht22State {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
