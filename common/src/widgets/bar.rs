//! Vertical bar indicator.
//!
//! The bar fills upwards from its bottom edge. The filled part (indicator)
//! carries a vertical gradient; the rest is drawn as a light track.
//! Values are integers clamped to the bar's range, and changes are applied
//! immediately (no animation).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::primitives::fill_vertical_gradient;
use crate::colors::TRACK_GRAY;

/// A vertical bar with an integer range.
pub struct Bar {
    area: Rectangle,
    min: i32,
    max: i32,
    value: i32,
    top_color: Rgb565,
    bottom_color: Rgb565,
    dirty: bool,
}

impl Bar {
    /// Create a bar showing `range.0` (empty).
    pub const fn new(
        area: Rectangle,
        range: (i32, i32),
        top_color: Rgb565,
        bottom_color: Rgb565,
    ) -> Self {
        Self {
            area,
            min: range.0,
            max: range.1,
            value: range.0,
            top_color,
            bottom_color,
            dirty: true,
        }
    }

    /// Set the displayed value.
    ///
    /// The fraction is dropped (truncation towards zero) and the result is
    /// clamped to the bar range. Only a changed value marks the bar dirty.
    pub fn set_value(
        &mut self,
        value: f32,
    ) {
        let value = (value as i32).clamp(self.min, self.max);
        if value != self.value {
            self.value = value;
            self.dirty = true;
        }
    }

    /// Current integer value.
    #[inline]
    pub const fn value(&self) -> i32 { self.value }

    /// Outer rectangle of the bar.
    #[inline]
    pub const fn area(&self) -> Rectangle { self.area }

    /// Whether the bar changed since it was last drawn.
    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    /// Force a redraw on the next [`draw`](Self::draw).
    #[inline]
    pub fn invalidate(&mut self) { self.dirty = true; }

    /// Height of the filled part in pixels.
    pub fn indicator_height(&self) -> u32 {
        let span = self.max - self.min;
        if span <= 0 {
            return 0;
        }
        let filled = (self.value - self.min) as u32;
        filled * self.area.size.height / span as u32
    }

    /// Rectangle covered by the filled part.
    pub fn indicator_area(&self) -> Rectangle {
        let height = self.indicator_height();
        let bottom = self.area.top_left.y + self.area.size.height as i32;
        Rectangle::new(
            Point::new(self.area.top_left.x, bottom - height as i32),
            Size::new(self.area.size.width, height),
        )
    }

    /// Draw track and indicator. Clears the dirty flag.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let indicator = self.indicator_area();
        let track = Rectangle::new(
            self.area.top_left,
            Size::new(self.area.size.width, self.area.size.height - indicator.size.height),
        );
        display.fill_solid(&track, TRACK_GRAY)?;
        fill_vertical_gradient(display, &indicator, self.top_color, self.bottom_color)?;
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
    use crate::colors::{BLUE, RED};
    use crate::test_support::FrameBuffer;

    fn bar() -> Bar { Bar::new(Rectangle::new(Point::new(20, 20), Size::new(10, 100)), (0, 40), RED, BLUE) }

    #[test]
    fn test_new_bar_is_empty_and_dirty() {
        let bar = bar();
        assert_eq!(bar.value(), 0);
        assert_eq!(bar.indicator_height(), 0);
        assert!(bar.is_dirty());
    }

    #[test]
    fn test_set_value_truncates() {
        let mut bar = bar();
        bar.set_value(23.9);
        assert_eq!(bar.value(), 23);
        bar.set_value(-0.5);
        assert_eq!(bar.value(), 0);
    }

    #[test]
    fn test_set_value_clamps() {
        let mut bar = bar();
        bar.set_value(55.0);
        assert_eq!(bar.value(), 40);
        bar.set_value(-12.0);
        assert_eq!(bar.value(), 0);
        bar.set_value(f32::NAN);
        assert_eq!(bar.value(), 0);
    }

    #[test]
    fn test_dirty_only_on_change() {
        let mut bar = bar();
        let mut fb = FrameBuffer::new();
        bar.set_value(20.0);
        bar.draw(&mut fb).unwrap();
        assert!(!bar.is_dirty());

        bar.set_value(20.7); // same integer value
        assert!(!bar.is_dirty());
        bar.set_value(21.0);
        assert!(bar.is_dirty());
    }

    #[test]
    fn test_indicator_geometry() {
        let mut bar = bar();
        bar.set_value(10.0);
        assert_eq!(bar.indicator_height(), 25);
        let indicator = bar.indicator_area();
        assert_eq!(indicator.top_left, Point::new(20, 95));
        assert_eq!(indicator.size, Size::new(10, 25));

        bar.set_value(40.0);
        assert_eq!(bar.indicator_area(), bar.area());
    }

    #[test]
    fn test_draw_fills_track_and_indicator() {
        let mut bar = bar();
        let mut fb = FrameBuffer::new();
        bar.set_value(20.0);
        bar.draw(&mut fb).unwrap();

        // Upper half is track, lower half is the gradient
        assert_eq!(fb.pixel(20, 20), TRACK_GRAY);
        assert_eq!(fb.pixel(25, 69), TRACK_GRAY);
        assert_eq!(fb.pixel(25, 70), RED);
        assert_eq!(fb.pixel(25, 119), BLUE);
        assert_eq!(fb.take_writes(), 10 * 100);
    }
}
