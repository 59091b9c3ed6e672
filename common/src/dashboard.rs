//! One iteration of the panel's main loop.
//!
//! Each tick polls the sensor, pushes the held readings into the bars and,
//! once every [`TICKS_PER_UPDATE`](crate::config::TICKS_PER_UPDATE) ticks,
//! appends a chart point and refreshes the seconds label. Drawing is a
//! separate step so platforms can decide when to flush.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::input::{InputEvent, InputHandler, ResetSource};
use crate::reader::SensorReader;
use crate::screen::{Control, Screen};
use crate::sensor::{Sensor, SensorError};
use crate::tick::{TickCounter, elapsed_seconds, is_update_tick};

/// What happened during a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// Counter value the tick ran with (before incrementing).
    pub count: u32,
    /// Outcome of the sensor poll.
    pub poll: Result<(), SensorError>,
    /// Whether the chart and seconds label were updated.
    pub chart_updated: bool,
}

impl TickReport {
    /// The poll error worth reporting. `Busy` only means no new sample was due.
    pub fn poll_failure(&self) -> Option<SensorError> {
        self.poll.err().filter(|err| *err != SensorError::Busy)
    }
}

/// Sensor reader, screen and input state for the panel.
pub struct Dashboard {
    reader: SensorReader,
    screen: Screen,
    input: InputHandler,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            reader: SensorReader::new(),
            screen: Screen::new(),
            input: InputHandler::new(),
        }
    }

    /// Show the keypad focus ring on the focused control.
    pub fn enable_keypad_focus(&mut self) { self.screen.set_focus(Some(self.input.focused())); }

    /// Run one loop iteration and advance the counter.
    pub fn tick<S: Sensor>(
        &mut self,
        sensor: &mut S,
        ticks: &TickCounter,
    ) -> TickReport {
        let count = ticks.get();
        let poll = self.reader.poll(sensor);

        let temperature = self.reader.temperature().to_f32();
        let humidity = self.reader.humidity().to_f32();
        self.screen.set_readings(temperature, humidity);

        let chart_updated = is_update_tick(count);
        if chart_updated {
            self.screen.push_chart_point(temperature, humidity);
            self.screen.set_elapsed_seconds(elapsed_seconds(count));
        }

        ticks.increment();
        TickReport {
            count,
            poll,
            chart_updated,
        }
    }

    /// Route a pointer, keypad or encoder event. Activating RESET zeroes the counter.
    pub fn handle_input(
        &mut self,
        event: InputEvent,
        ticks: &TickCounter,
    ) -> Option<ResetSource> {
        let (control, source) = self.input.handle(event, &self.screen)?;
        match control {
            Control::Reset => ticks.reset(),
        }
        Some(source)
    }

    /// Draw pending changes. Returns `true` if anything was drawn.
    pub fn render<D>(
        &mut self,
        display: &mut D,
    ) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.screen.draw(display)
    }

    /// Force a full repaint on the next [`render`](Self::render).
    pub fn invalidate(&mut self) { self.screen.invalidate(); }

    #[inline]
    pub const fn screen(&self) -> &Screen { &self.screen }

    #[inline]
    pub const fn reader(&self) -> &SensorReader { &self.reader }
}

impl Default for Dashboard {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
