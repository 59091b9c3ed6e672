//! Sensor device model.
//!
//! A sensor is polled in two steps: [`Sensor::sample_fetch`] triggers a
//! conversion and latches the result inside the driver, then
//! [`Sensor::channel_get`] reads individual quantities from the latched
//! sample. Values are fixed-point ([`SensorValue`]) so drivers never need
//! floating point.

use core::fmt;

/// Anything that can report whether it finished initializing.
pub trait Device {
    /// Human-readable device name for log output.
    fn name(&self) -> &'static str;

    /// Whether the device is usable.
    fn is_ready(&self) -> bool;
}

/// A physical quantity exposed by a sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Ambient temperature in °C.
    AmbientTemp,
    /// Relative humidity in %.
    Humidity,
}

/// Errors a sensor can report while fetching or reading a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The device has not been initialized or holds no sample yet.
    #[error("sensor not ready")]
    NotReady,
    /// Fetch requested before the minimum sampling interval elapsed.
    #[error("sensor busy")]
    Busy,
    /// The device stopped responding mid-transfer.
    #[error("sensor timed out")]
    Timeout,
    /// The received frame failed its checksum.
    #[error("checksum mismatch")]
    Checksum,
    /// The driver does not provide the requested channel.
    #[error("unsupported channel")]
    UnsupportedChannel,
    /// Bus or pin level error.
    #[error("sensor I/O error")]
    Io,
}

/// A humidity/temperature sensor.
pub trait Sensor: Device {
    /// Acquire a fresh sample and latch it for [`channel_get`](Sensor::channel_get).
    fn sample_fetch(&mut self) -> Result<(), SensorError>;

    /// Read one channel of the latched sample.
    fn channel_get(
        &self,
        channel: Channel,
    ) -> Result<SensorValue, SensorError>;
}

/// Fixed-point sensor reading: `integer + micro / 1_000_000`.
///
/// Both parts carry the sign of the value, so -1.5 is `{ integer: -1, micro: -500_000 }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorValue {
    /// Whole part.
    pub integer: i32,
    /// Fractional part in millionths.
    pub micro: i32,
}

impl SensorValue {
    /// Zero reading.
    pub const ZERO: Self = Self { integer: 0, micro: 0 };

    /// Build a value from tenths (DHT22 native resolution).
    pub const fn from_deci(deci: i32) -> Self {
        Self {
            integer: deci / 10,
            micro: (deci % 10) * 100_000,
        }
    }

    /// Build a value from a float, truncating below one millionth.
    pub fn from_f32(value: f32) -> Self {
        let integer = value as i32;
        let micro = ((value - integer as f32) * 1_000_000.0) as i32;
        Self { integer, micro }
    }

    /// Lossy conversion to `f32`.
    pub fn to_f32(self) -> f32 { self.integer as f32 + self.micro as f32 / 1_000_000.0 }
}

impl fmt::Display for SensorValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let negative = self.integer < 0 || self.micro < 0;
        let tenths = (self.micro / 100_000).unsigned_abs();
        write!(
            f,
            "{}{}.{}",
            if negative { "-" } else { "" },
            self.integer.unsigned_abs(),
            tenths
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_deci() {
        assert_eq!(SensorValue::from_deci(235), SensorValue { integer: 23, micro: 500_000 });
        assert_eq!(SensorValue::from_deci(-15), SensorValue { integer: -1, micro: -500_000 });
        assert_eq!(SensorValue::from_deci(0), SensorValue::ZERO);
    }

    #[test]
    fn test_to_f32() {
        assert!((SensorValue::from_deci(235).to_f32() - 23.5).abs() < 0.001);
        assert!((SensorValue::from_deci(-15).to_f32() + 1.5).abs() < 0.001);
    }

    #[test]
    fn test_from_f32_truncates() {
        let value = SensorValue::from_f32(21.75);
        assert_eq!(value.integer, 21);
        assert!((value.micro - 750_000).abs() <= 1);
        let negative = SensorValue::from_f32(-3.25);
        assert_eq!(negative.integer, -3);
        assert!((negative.micro + 250_000).abs() <= 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(SensorValue::from_deci(235).to_string(), "23.5");
        assert_eq!(SensorValue::from_deci(-15).to_string(), "-1.5");
        assert_eq!(SensorValue::from_deci(-3).to_string(), "-0.3");
        assert_eq!(SensorValue::ZERO.to_string(), "0.0");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(SensorError::Checksum.to_string(), "checksum mismatch");
        assert_eq!(SensorError::Busy.to_string(), "sensor busy");
    }
}
