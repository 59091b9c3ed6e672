//! Input handling for pointer, keypad and encoder events.
//!
//! A pointer click activates a control only when press and release both
//! land on it. Keypad Enter and an encoder press act on the focused control;
//! RESET is the only focusable one, so both always activate it.

use embedded_graphics::prelude::Point;

use crate::screen::{Control, Screen};

/// Input delivered to the UI by a pointer or keypad driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Pointer pressed at a screen position.
    PointerDown(Point),
    /// Pointer released at a screen position.
    PointerUp(Point),
    /// Enter key on the keypad.
    EnterKey,
    /// Push on a rotary encoder.
    EncoderPress,
}

/// What caused a counter reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetSource {
    /// The hardware reset button (interrupt driven, bypasses the UI).
    Button,
    /// A click on the on-screen RESET button.
    Pointer,
    /// Enter on the keypad while RESET is focused.
    Keypad,
    /// Encoder press while RESET is focused.
    Encoder,
}

/// Click tracking for on-screen controls.
pub struct InputHandler {
    pressed: Option<Control>,
    focused: Control,
}

impl InputHandler {
    /// Create a handler with nothing pressed and RESET focused.
    pub const fn new() -> Self {
        Self {
            pressed: None,
            focused: Control::Reset,
        }
    }

    /// Control currently holding keypad focus.
    #[inline]
    pub const fn focused(&self) -> Control { self.focused }

    /// Control pressed but not yet released.
    #[inline]
    pub const fn pressed(&self) -> Option<Control> { self.pressed }

    /// Process one event. Returns the activated control and how it was activated.
    pub fn handle(
        &mut self,
        event: InputEvent,
        screen: &Screen,
    ) -> Option<(Control, ResetSource)> {
        match event {
            InputEvent::PointerDown(point) => {
                self.pressed = screen.hit_test(point);
                None
            }
            InputEvent::PointerUp(point) => {
                let pressed = self.pressed.take()?;
                (screen.hit_test(point) == Some(pressed)).then_some((pressed, ResetSource::Pointer))
            }
            InputEvent::EnterKey => Some((self.focused, ResetSource::Keypad)),
            InputEvent::EncoderPress => Some((self.focused, ResetSource::Encoder)),
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::layout::{CHART_AREA, RESET_BUTTON_AREA};

    #[test]
    fn test_click_on_button() {
        let screen = Screen::new();
        let mut input = InputHandler::new();
        let center = RESET_BUTTON_AREA.center();

        assert_eq!(input.handle(InputEvent::PointerDown(center), &screen), None);
        assert_eq!(input.pressed(), Some(Control::Reset));
        assert_eq!(
            input.handle(InputEvent::PointerUp(center), &screen),
            Some((Control::Reset, ResetSource::Pointer))
        );
        assert_eq!(input.pressed(), None);
    }

    #[test]
    fn test_release_outside_cancels() {
        let screen = Screen::new();
        let mut input = InputHandler::new();

        input.handle(InputEvent::PointerDown(RESET_BUTTON_AREA.center()), &screen);
        assert_eq!(input.handle(InputEvent::PointerUp(CHART_AREA.center()), &screen), None);
        assert_eq!(input.pressed(), None);
    }

    #[test]
    fn test_press_outside_release_inside_ignored() {
        let screen = Screen::new();
        let mut input = InputHandler::new();

        input.handle(InputEvent::PointerDown(CHART_AREA.center()), &screen);
        assert_eq!(input.handle(InputEvent::PointerUp(RESET_BUTTON_AREA.center()), &screen), None);
    }

    #[test]
    fn test_release_without_press_ignored() {
        let screen = Screen::new();
        let mut input = InputHandler::new();
        assert_eq!(input.handle(InputEvent::PointerUp(RESET_BUTTON_AREA.center()), &screen), None);
    }

    #[test]
    fn test_enter_activates_focused() {
        let screen = Screen::new();
        let mut input = InputHandler::new();
        assert_eq!(input.focused(), Control::Reset);
        assert_eq!(
            input.handle(InputEvent::EnterKey, &screen),
            Some((Control::Reset, ResetSource::Keypad))
        );
    }

    #[test]
    fn test_encoder_press_activates_focused() {
        let screen = Screen::new();
        let mut input = InputHandler::new();
        assert_eq!(
            input.handle(InputEvent::EncoderPress, &screen),
            Some((Control::Reset, ResetSource::Encoder))
        );
    }

    #[test]
    fn test_encoder_press_leaves_pointer_state() {
        let screen = Screen::new();
        let mut input = InputHandler::new();
        let center = RESET_BUTTON_AREA.center();

        input.handle(InputEvent::PointerDown(center), &screen);
        input.handle(InputEvent::EncoderPress, &screen);
        assert_eq!(input.pressed(), Some(Control::Reset));
        assert_eq!(
            input.handle(InputEvent::PointerUp(center), &screen),
            Some((Control::Reset, ResetSource::Pointer))
        );
    }
}
