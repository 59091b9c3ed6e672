//! Climate panel firmware for Raspberry Pi Pico 2 (RP2350).
//!
//! Reads a DHT22 and shows temperature and humidity on the Pimoroni PIM715
//! Display Pack 2.8" as two bars, a rolling chart and a seconds counter.
//!
//! # Wiring
//!
//! - DHT22 data: GPIO22 (internal pull-up)
//! - Display: SPI0, see [`display`]
//!
//! # Button Controls
//!
//! - **A**: Reset the counter (interrupt driven, bypasses the UI)
//! - **B**: Keypad Enter (activates the focused RESET control)
//!
//! Startup failures are logged with their exit code and the firmware parks;
//! the main loop is never entered.

#![no_std]
#![no_main]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

mod button;
mod dht22;
mod display;

use core::convert::Infallible;

use climate_panel_common::config::{TICK_PERIOD_MS, TICKS_PER_UPDATE};
use climate_panel_common::{Dashboard, Device, StartupError, TickCounter, TickReport, startup};
use defmt::{debug, error, info, warn};
use embassy_executor::Spawner;
use embassy_rp::Peripherals;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use crate::button::{KEYPAD_EVENTS, keypad_task, reset_button_task};
use crate::dht22::Dht22;
use crate::display::{display_spi_config, init_display};

/// Loop tick counter, also zeroed from the reset button task.
pub static TICKS: TickCounter = TickCounter::new();

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"climate-panel"),
    embassy_rp::binary_info::rp_program_description!(c"DHT22 temperature/humidity panel on PIM715 Display"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Climate panel starting...");

    let p = embassy_rp::init(Default::default());

    let Err(err) = run(spawner, p).await;
    error!("Startup failed: {} (exit code {})", err, err.exit_code());

    loop {
        Timer::after_secs(60).await;
    }
}

/// Bring up devices in order (sensor, display, buttons), then run the loop forever.
async fn run(
    spawner: Spawner,
    p: Peripherals,
) -> Result<Infallible, StartupError> {
    let mut sensor = Dht22::new(p.PIN_22);
    startup::check_sensor(&sensor)?;
    info!("Sensor {} ready", sensor.name());

    // PIM715 pinout: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let mut backlight = Output::new(p.PIN_20, Level::Low); // Off until the first frame is drawn

    // TX-only, display doesn't need MISO
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());
    let mut display = init_display(spi, cs, dc)?;
    info!("Display initialized!");

    // PIM715: A=12, B=13
    let reset_button = Input::new(p.PIN_12, Pull::Up);
    let enter_button = Input::new(p.PIN_13, Pull::Up);
    spawner.spawn(reset_button_task(reset_button).map_err(|_| StartupError::ButtonConfig)?);
    spawner.spawn(keypad_task(enter_button).map_err(|_| StartupError::ButtonConfig)?);
    info!("Buttons initialized!");

    let mut dashboard = Dashboard::new();
    dashboard.enable_keypad_focus();
    dashboard.render(&mut display).map_err(|_| StartupError::DisplayNotReady)?;
    backlight.set_high();

    loop {
        while let Ok(event) = KEYPAD_EVENTS.try_receive() {
            if let Some(source) = dashboard.handle_input(event, &TICKS) {
                info!("Counter reset ({})", source);
            }
        }

        let report = dashboard.tick(&mut sensor, &TICKS);
        log_tick(&report, &dashboard);

        if dashboard.render(&mut display).is_err() {
            warn!("Display write failed");
        }

        Timer::after_millis(TICK_PERIOD_MS).await;
    }
}

fn log_tick(
    report: &TickReport,
    dashboard: &Dashboard,
) {
    if let Some(err) = report.poll_failure() {
        debug!("Tick {}: sensor poll failed: {}", report.count, err);
    }
    if report.chart_updated {
        let reader = dashboard.reader();
        info!(
            "{} s: {} C, {} %RH",
            report.count / TICKS_PER_UPDATE,
            reader.temperature().to_f32(),
            reader.humidity().to_f32()
        );
    }
}
