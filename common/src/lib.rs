//! Shared logic for the climate panel.
//!
//! This crate contains platform-agnostic code shared between the desktop
//! simulator and the Pico 2 firmware:
//!
//! - [`config`]: Screen layout and loop timing constants
//! - [`colors`] / [`styles`]: RGB565 palette and pre-computed text styles
//! - [`tick`]: Atomic tick counter driving the once-per-second cadence
//! - [`sensor`]: Sensor device model (channels, fixed-point values, errors)
//! - [`dht22`]: DHT22 frame decoding and sampling-interval bookkeeping
//! - [`reader`]: Stale-on-error sensor polling
//! - [`widgets`]: Bar, chart, label and button widgets
//! - [`screen`]: The composed panel and its redraw logic
//! - [`input`]: Pointer/keypad handling for the on-screen RESET control
//! - [`startup`]: Device readiness checks and startup errors
//! - [`dashboard`]: One loop iteration tying it all together
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p climate-panel-common
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while the firmware links the
//! crate as `no_std`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod dashboard;
pub mod dht22;
pub mod input;
pub mod reader;
pub mod render;
pub mod screen;
pub mod sensor;
pub mod startup;
pub mod styles;
pub mod tick;
pub mod widgets;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use dashboard::{Dashboard, TickReport};
pub use input::{InputEvent, ResetSource};
pub use sensor::{Channel, Device, Sensor, SensorError, SensorValue};
pub use startup::StartupError;
pub use tick::TickCounter;
