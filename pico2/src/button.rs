//! Button tasks for the PIM715 buttons.
//!
//! Buttons are active-low with internal pull-ups. Each task sleeps until the
//! GPIO interrupt reports a falling edge. Resets are idempotent, so contact
//! bounce is not filtered.

use climate_panel_common::{InputEvent, ResetSource};
use defmt::{debug, info};
use embassy_rp::gpio::Input;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::TICKS;

/// Keypad events for the main loop.
pub static KEYPAD_EVENTS: Channel<CriticalSectionRawMutex, InputEvent, 4> = Channel::new();

/// Hardware reset button: zeroes the counter directly, bypassing the UI.
#[embassy_executor::task]
pub async fn reset_button_task(mut button: Input<'static>) {
    info!("Reset button task started");
    loop {
        button.wait_for_falling_edge().await;
        TICKS.reset();
        info!("Counter reset ({})", ResetSource::Button);
    }
}

/// Keypad Enter: forwarded to the UI, which activates the focused control.
#[embassy_executor::task]
pub async fn keypad_task(mut button: Input<'static>) {
    info!("Keypad task started");
    loop {
        button.wait_for_falling_edge().await;
        if KEYPAD_EVENTS.try_send(InputEvent::EnterKey).is_err() {
            debug!("Keypad queue full, Enter dropped");
        }
    }
}
