//! Simulated DHT22.
//!
//! Readings follow slow sine waves over a virtual clock that the main loop
//! advances by one tick period per iteration. Every conversion goes through
//! the DHT22 frame encoding and checksum, and the same sampling-interval
//! rules as the firmware driver.

use climate_panel_common::dht22::{Dht22State, Measurement, decode_frame, encode_frame};
use climate_panel_common::sensor::{Channel, Device, Sensor, SensorError, SensorValue};

/// Software DHT22 driven by a virtual millisecond clock.
pub struct SimulatedSensor {
    now_ms: u64,
    online: bool,
    fail_every: Option<u32>,
    conversions: u32,
    state: Dht22State,
}

impl SimulatedSensor {
    /// `fail_every` makes every N-th conversion time out.
    pub const fn new(
        online: bool,
        fail_every: Option<u32>,
    ) -> Self {
        Self {
            now_ms: 0,
            online,
            fail_every,
            conversions: 0,
            state: Dht22State::new(),
        }
    }

    /// Advance the virtual clock.
    pub fn advance(
        &mut self,
        ms: u64,
    ) {
        self.now_ms += ms;
    }

    /// Conversions attempted so far (successful or not).
    pub const fn conversions(&self) -> u32 { self.conversions }

    /// What the sensor would measure right now.
    pub fn current_measurement(&self) -> Measurement {
        let t = self.now_ms as f32 / 1000.0;
        Measurement {
            temperature: SensorValue::from_deci((fake_signal(t, 18.0, 32.0, 0.05) * 10.0) as i32),
            humidity: SensorValue::from_deci((fake_signal(t, 35.0, 75.0, 0.03) * 10.0) as i32),
        }
    }

    fn conversion_fails(&self) -> bool { self.fail_every.is_some_and(|n| n > 0 && self.conversions % n == 0) }
}

impl Device for SimulatedSensor {
    fn name(&self) -> &'static str { "dht22-sim" }

    fn is_ready(&self) -> bool { self.online }
}

impl Sensor for SimulatedSensor {
    fn sample_fetch(&mut self) -> Result<(), SensorError> {
        if !self.online {
            return Err(SensorError::NotReady);
        }
        self.state.begin_fetch(self.now_ms)?;
        self.conversions += 1;

        let sample = if self.conversion_fails() {
            Err(SensorError::Timeout)
        } else {
            decode_frame(&encode_frame(&self.current_measurement()))
        };
        self.state.complete_fetch(sample)
    }

    fn channel_get(
        &self,
        channel: Channel,
    ) -> Result<SensorValue, SensorError> {
        if !self.online {
            return Err(SensorError::NotReady);
        }
        self.state.channel(channel)
    }
}

/// Generate a sinusoidal signal oscillating between min and max values.
///
/// # Parameters
/// - `t`: Time in seconds
/// - `min`: Minimum output value
/// - `max`: Maximum output value
/// - `freq`: Oscillation frequency in radians per second
fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}
