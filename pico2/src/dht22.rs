//! DHT22 on a single open-drain GPIO.
//!
//! The wire protocol is handled by the `dht22-sensor` driver. This wrapper
//! adds the sampling-interval guard and the latched sample behind the
//! [`Sensor`] trait. A read busy-waits with interrupts masked, so a fetch
//! blocks the executor for a few milliseconds.

use climate_panel_common::dht22::{Dht22State, Measurement};
use climate_panel_common::sensor::{Channel, Device, Sensor, SensorError, SensorValue};
use embassy_rp::Peri;
use embassy_rp::gpio::{Level, OutputOpenDrain, Pin};
use embassy_time::{Delay, Duration, Instant, block_for};

type Driver<'d> = dht22_sensor::Dht22<OutputOpenDrain<'d>, Delay>;

/// DHT22 attached to one GPIO with a pull-up.
pub struct Dht22<'d> {
    driver: Driver<'d>,
    state: Dht22State,
    ready: bool,
}

impl<'d> Dht22<'d> {
    /// Release the line with the pull-up enabled and check that it idles high.
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        let mut pin = OutputOpenDrain::new(pin, Level::High);
        pin.set_pullup(true);
        block_for(Duration::from_micros(10));
        let ready = pin.is_high();

        Self {
            driver: Driver::new(pin, Delay),
            state: Dht22State::new(),
            ready,
        }
    }
}

impl Device for Dht22<'_> {
    fn name(&self) -> &'static str { "dht22" }

    fn is_ready(&self) -> bool { self.ready }
}

impl Sensor for Dht22<'_> {
    fn sample_fetch(&mut self) -> Result<(), SensorError> {
        if !self.ready {
            return Err(SensorError::NotReady);
        }
        self.state.begin_fetch(Instant::now().as_millis())?;
        let sample = cortex_m::interrupt::free(|_| self.driver.read())
            .map(Measurement::from)
            .map_err(SensorError::from);
        self.state.complete_fetch(sample)
    }

    fn channel_get(
        &self,
        channel: Channel,
    ) -> Result<SensorValue, SensorError> {
        self.state.channel(channel)
    }
}
