//! Climate panel simulator for desktop.
//!
//! Runs the same [`Dashboard`] loop as the Pico 2 firmware against a
//! simulated DHT22. By default the loop runs headless for a fixed number of
//! ticks on a virtual clock and writes a PNG snapshot of the final frame.
//! Built with the `window` feature, `--window` opens an SDL2 window that runs
//! in real time:
//!
//! | Input | Action |
//! |-------|--------|
//! | Click RESET | Reset the counter (pointer) |
//! | Enter | Reset the counter (keypad) |
//! | Space | Reset the counter (encoder press) |
//! | R | Reset the counter (hardware button) |
//!
//! Exit code is 0 after a completed run and 1 when startup fails.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod cli;
mod display;
mod sensor;

use std::process::ExitCode;

use anyhow::Context;
use climate_panel_common::config::{TICK_PERIOD_MS, TICKS_PER_UPDATE};
use climate_panel_common::reader::SensorReader;
use climate_panel_common::{Dashboard, Device, StartupError, TickCounter, TickReport, startup};
use log::{debug, error, info};

use crate::cli::Cli;
use crate::display::SimulatedPanel;
use crate::sensor::SimulatedSensor;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.to_filter_string())).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(startup) = err.downcast_ref::<StartupError>() {
                error!("Startup failed: {startup}");
            } else {
                error!("{err:#}");
            }
            ExitCode::from(exit_status(&err))
        }
    }
}

/// Process exit status for an error returned by [`run`].
fn exit_status(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<StartupError>()
        .map_or(1, StartupError::exit_code)
}

/// Create the simulated devices and run the readiness checks.
fn start(cli: &Cli) -> anyhow::Result<(SimulatedSensor, SimulatedPanel)> {
    let sensor = SimulatedSensor::new(!cli.sensor_offline, cli.fail_every);
    let panel = SimulatedPanel::new(cli.scale, !cli.display_offline);

    startup::check_devices(&sensor, &panel)?;
    info!("Sensor {} and display {} ready", sensor.name(), panel.name());
    Ok((sensor, panel))
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let (mut sensor, mut panel) = start(cli)?;

    let ticks = TickCounter::new();
    let mut dashboard = Dashboard::new();

    if cli.window {
        return run_window(&mut dashboard, &mut sensor, &mut panel, &ticks);
    }

    for _ in 0..cli.ticks {
        sensor.advance(TICK_PERIOD_MS);
        let report = dashboard.tick(&mut sensor, &ticks);
        log_tick(&report, dashboard.reader());
        dashboard.render(&mut panel.display)?;
    }

    panel
        .display
        .to_rgb_output_image(&panel.output_settings())
        .save_png(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!(
        "Ran {} ticks ({} conversions), snapshot saved to {}",
        cli.ticks,
        sensor.conversions(),
        cli.output.display()
    );
    Ok(())
}

fn log_tick(
    report: &TickReport,
    reader: &SensorReader,
) {
    if let Some(err) = report.poll_failure() {
        debug!("Tick {}: sensor poll failed: {err}", report.count);
    }
    if report.chart_updated {
        info!(
            "{} s: {} \u{b0}C, {} %RH",
            report.count / TICKS_PER_UPDATE,
            reader.temperature(),
            reader.humidity()
        );
    }
}

#[cfg(feature = "window")]
fn run_window(
    dashboard: &mut Dashboard,
    sensor: &mut SimulatedSensor,
    panel: &mut SimulatedPanel,
    ticks: &TickCounter,
) -> anyhow::Result<()> {
    use std::thread;
    use std::time::{Duration, Instant};

    use climate_panel_common::{InputEvent, ResetSource};
    use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
    use embedded_graphics_simulator::{SimulatorEvent, Window};

    const TICK_PERIOD: Duration = Duration::from_millis(TICK_PERIOD_MS);

    let mut window = Window::new("Climate Panel", &panel.output_settings());
    dashboard.enable_keypad_focus();
    dashboard.render(&mut panel.display)?;
    window.update(&panel.display);

    loop {
        let tick_start = Instant::now();

        for event in window.events() {
            let input = match event {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => InputEvent::PointerDown(point),
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    point,
                } => InputEvent::PointerUp(point),
                SimulatorEvent::KeyDown {
                    keycode: Keycode::Return,
                    repeat: false,
                    ..
                } => InputEvent::EnterKey,
                SimulatorEvent::KeyDown {
                    keycode: Keycode::Space,
                    repeat: false,
                    ..
                } => InputEvent::EncoderPress,
                SimulatorEvent::KeyDown {
                    keycode: Keycode::R,
                    repeat: false,
                    ..
                } => {
                    ticks.reset();
                    info!("Counter reset ({:?})", ResetSource::Button);
                    continue;
                }
                _ => continue,
            };
            if let Some(source) = dashboard.handle_input(input, ticks) {
                info!("Counter reset ({source:?})");
            }
        }

        sensor.advance(TICK_PERIOD_MS);
        let report = dashboard.tick(sensor, ticks);
        log_tick(&report, dashboard.reader());
        dashboard.render(&mut panel.display)?;
        window.update(&panel.display);

        if let Some(remaining) = TICK_PERIOD.checked_sub(tick_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

#[cfg(not(feature = "window"))]
fn run_window(
    _dashboard: &mut Dashboard,
    _sensor: &mut SimulatedSensor,
    _panel: &mut SimulatedPanel,
    _ticks: &TickCounter,
) -> anyhow::Result<()> {
    anyhow::bail!("interactive mode needs the `window` feature (cargo run --features window -- --window)")
}
