//! Push button with a centered caption.
//!
//! The button only knows its geometry and focus state; click detection lives
//! in [`crate::input`].

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment};
use embedded_graphics::text::Text;

use crate::colors::{BACKGROUND, FOCUS_GRAY, PALETTE_BLUE};
use crate::styles::{BUTTON_STYLE, CENTER_MIDDLE};

/// Corner radius of the button body.
const CORNER_RADIUS: u32 = 6;

/// Width of the focus outline drawn outside the body.
const FOCUS_WIDTH: u32 = 2;

const BODY_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PALETTE_BLUE);

/// A clickable, focusable button.
pub struct Button {
    area: Rectangle,
    caption: &'static str,
    focused: bool,
    dirty: bool,
}

impl Button {
    /// Create an unfocused button.
    pub const fn new(
        area: Rectangle,
        caption: &'static str,
    ) -> Self {
        Self {
            area,
            caption,
            focused: false,
            dirty: true,
        }
    }

    /// Whether `point` lies on the button.
    #[inline]
    pub fn contains(
        &self,
        point: Point,
    ) -> bool {
        self.area.contains(point)
    }

    /// Show or hide the focus outline.
    pub fn set_focused(
        &mut self,
        focused: bool,
    ) {
        if self.focused != focused {
            self.focused = focused;
            self.dirty = true;
        }
    }

    /// Whether the button has keypad focus.
    #[inline]
    pub const fn is_focused(&self) -> bool { self.focused }

    /// Button body.
    #[inline]
    pub const fn area(&self) -> Rectangle { self.area }

    /// Whether the button changed since it was last drawn.
    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    /// Force a redraw on the next [`draw`](Self::draw).
    #[inline]
    pub fn invalidate(&mut self) { self.dirty = true; }

    /// Draw body, caption and focus outline. Clears the dirty flag.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let outline_color = if self.focused { FOCUS_GRAY } else { BACKGROUND };
        let outline = PrimitiveStyleBuilder::new()
            .stroke_color(outline_color)
            .stroke_width(FOCUS_WIDTH)
            .stroke_alignment(StrokeAlignment::Outside)
            .build();
        let corners = Size::new(CORNER_RADIUS, CORNER_RADIUS);

        RoundedRectangle::with_equal_corners(self.area, corners)
            .into_styled(outline)
            .draw(display)?;
        RoundedRectangle::with_equal_corners(self.area, corners)
            .into_styled(BODY_STYLE)
            .draw(display)?;
        Text::with_text_style(self.caption, self.area.center(), BUTTON_STYLE, CENTER_MIDDLE).draw(display)?;

        self.dirty = false;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FrameBuffer;

    fn button() -> Button { Button::new(Rectangle::new(Point::new(200, 10), Size::new(80, 28)), "RESET") }

    #[test]
    fn test_contains() {
        let button = button();
        assert!(button.contains(Point::new(200, 10)));
        assert!(button.contains(Point::new(279, 37)));
        assert!(!button.contains(Point::new(280, 37)));
        assert!(!button.contains(Point::new(199, 20)));
    }

    #[test]
    fn test_focus_marks_dirty() {
        let mut button = button();
        let mut fb = FrameBuffer::new();
        button.draw(&mut fb).unwrap();
        assert!(!button.is_dirty());

        button.set_focused(false);
        assert!(!button.is_dirty());
        button.set_focused(true);
        assert!(button.is_dirty());
        assert!(button.is_focused());
    }

    #[test]
    fn test_draw_body_and_outline() {
        let mut button = button();
        let mut fb = FrameBuffer::new();
        button.set_focused(true);
        button.draw(&mut fb).unwrap();

        // Body edge (left middle) and outline just outside it
        assert_eq!(fb.pixel(200, 24), PALETTE_BLUE);
        assert_eq!(fb.pixel(198, 24), FOCUS_GRAY);
    }
}
