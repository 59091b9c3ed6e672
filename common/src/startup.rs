//! Startup checks run before the main loop.
//!
//! Devices are checked in a fixed order: sensor, then display. Button
//! configuration happens afterwards in the platform crate and reports
//! [`StartupError::ButtonConfig`] on failure.

use crate::sensor::Device;

/// Exit code reported for every startup failure.
pub const STARTUP_FAILURE_EXIT_CODE: u8 = 1;

/// Fatal errors that abort startup before the main loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    /// The sensor reports not ready.
    #[error("sensor device {name} not ready")]
    SensorNotReady { name: &'static str },
    /// The display failed to initialize.
    #[error("display device not ready")]
    DisplayNotReady,
    /// The reset button pin or its handler could not be set up.
    #[error("failed to configure reset button")]
    ButtonConfig,
}

impl StartupError {
    /// Process exit code for this error.
    #[inline]
    pub const fn exit_code(&self) -> u8 { STARTUP_FAILURE_EXIT_CODE }
}

/// Fail with [`StartupError::SensorNotReady`] unless the sensor is ready.
pub fn check_sensor(sensor: &impl Device) -> Result<(), StartupError> {
    if sensor.is_ready() {
        Ok(())
    } else {
        Err(StartupError::SensorNotReady { name: sensor.name() })
    }
}

/// Fail with [`StartupError::DisplayNotReady`] unless the display is ready.
pub fn check_display(display: &impl Device) -> Result<(), StartupError> {
    if display.is_ready() { Ok(()) } else { Err(StartupError::DisplayNotReady) }
}

/// Check the sensor, then the display.
pub fn check_devices(
    sensor: &impl Device,
    display: &impl Device,
) -> Result<(), StartupError> {
    check_sensor(sensor)?;
    check_display(display)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedSensor;

    struct FakeDisplay(bool);

    impl Device for FakeDisplay {
        fn name(&self) -> &'static str { "fake-display" }

        fn is_ready(&self) -> bool { self.0 }
    }

    #[test]
    fn test_all_ready() {
        assert_eq!(check_devices(&ScriptedSensor::new(), &FakeDisplay(true)), Ok(()));
    }

    #[test]
    fn test_sensor_not_ready() {
        let err = check_devices(&ScriptedSensor::offline(), &FakeDisplay(true)).unwrap_err();
        assert_eq!(err, StartupError::SensorNotReady { name: "scripted" });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_sensor_checked_first() {
        let err = check_devices(&ScriptedSensor::offline(), &FakeDisplay(false)).unwrap_err();
        assert!(matches!(err, StartupError::SensorNotReady { .. }));
    }

    #[test]
    fn test_display_not_ready() {
        let err = check_devices(&ScriptedSensor::new(), &FakeDisplay(false)).unwrap_err();
        assert_eq!(err, StartupError::DisplayNotReady);
        assert_eq!(err.exit_code(), STARTUP_FAILURE_EXIT_CODE);
    }

    #[test]
    fn test_exit_code_is_uniform() {
        for err in [
            StartupError::SensorNotReady { name: "dht22" },
            StartupError::DisplayNotReady,
            StartupError::ButtonConfig,
        ] {
            assert_eq!(err.exit_code(), 1);
        }
    }

    #[test]
    fn test_error_messages() {
        let err = StartupError::SensorNotReady { name: "dht22" };
        assert_eq!(err.to_string(), "sensor device dht22 not ready");
        assert_eq!(StartupError::ButtonConfig.to_string(), "failed to configure reset button");
    }
}
