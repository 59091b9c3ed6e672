//! Stale-on-error sensor polling.
//!
//! Each poll runs fetch → temperature → humidity and stops at the first
//! failing step. A step that succeeded keeps its new value; everything else
//! keeps the previous one. Nothing is retried or invalidated.
//!
//! A `Busy` sensor (inside its sampling interval) is the normal state for
//! most ticks, so it leaves the readings alone without counting as a failure.

use crate::sensor::{Channel, Sensor, SensorError, SensorValue};

/// Holds the most recent temperature and humidity readings.
pub struct SensorReader {
    temperature: SensorValue,
    humidity: SensorValue,
    failed_polls: u32,
}

impl SensorReader {
    /// Both readings start at zero.
    pub const fn new() -> Self {
        Self {
            temperature: SensorValue::ZERO,
            humidity: SensorValue::ZERO,
            failed_polls: 0,
        }
    }

    /// Poll the sensor once, updating whatever could be read.
    ///
    /// Returns the first error encountered. Callers may log it; the held
    /// readings are already in their correct (possibly stale) state.
    pub fn poll<S: Sensor>(
        &mut self,
        sensor: &mut S,
    ) -> Result<(), SensorError> {
        let result = self.read_channels(sensor);
        if let Err(err) = result
            && err != SensorError::Busy
        {
            self.failed_polls = self.failed_polls.wrapping_add(1);
        }
        result
    }

    fn read_channels<S: Sensor>(
        &mut self,
        sensor: &mut S,
    ) -> Result<(), SensorError> {
        sensor.sample_fetch()?;
        self.temperature = sensor.channel_get(Channel::AmbientTemp)?;
        self.humidity = sensor.channel_get(Channel::Humidity)?;
        Ok(())
    }

    /// Last temperature read (°C).
    #[inline]
    pub const fn temperature(&self) -> SensorValue { self.temperature }

    /// Last humidity read (%RH).
    #[inline]
    pub const fn humidity(&self) -> SensorValue { self.humidity }

    /// Number of polls that hit an error other than `Busy`.
    #[inline]
    pub const fn failed_polls(&self) -> u32 { self.failed_polls }
}

impl Default for SensorReader {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
