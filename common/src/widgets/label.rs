//! Single-line text label with a reserved area.
//!
//! The label owns a rectangle that is cleared to the background color before
//! the text is drawn, so shorter text never leaves remnants of longer text.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::BACKGROUND;
use crate::styles::TOP_LEFT;

/// A label holding up to `N` bytes of text.
pub struct Label<const N: usize> {
    area: Rectangle,
    style: MonoTextStyle<'static, Rgb565>,
    text: String<N>,
    dirty: bool,
}

impl<const N: usize> Label<N> {
    /// Create an empty label.
    pub const fn new(
        area: Rectangle,
        style: MonoTextStyle<'static, Rgb565>,
    ) -> Self {
        Self {
            area,
            style,
            text: String::new(),
            dirty: true,
        }
    }

    /// Replace the text, truncating at capacity on a character boundary.
    pub fn set_text(
        &mut self,
        text: &str,
    ) {
        if self.text.as_str() == text {
            return;
        }
        self.text.clear();
        for c in text.chars() {
            if self.text.push(c).is_err() {
                break;
            }
        }
        self.dirty = true;
    }

    /// Show an unsigned integer.
    pub fn set_number(
        &mut self,
        value: u32,
    ) {
        let mut buf: String<10> = String::new();
        let _ = write!(buf, "{value}");
        self.set_text(buf.as_str());
    }

    /// Current text.
    #[inline]
    pub fn text(&self) -> &str { self.text.as_str() }

    /// Whether the text changed since it was last drawn.
    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    /// Force a redraw on the next [`draw`](Self::draw).
    #[inline]
    pub fn invalidate(&mut self) { self.dirty = true; }

    /// Clear the reserved area and draw the text. Clears the dirty flag.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        display.fill_solid(&self.area, BACKGROUND)?;
        Text::with_text_style(self.text.as_str(), self.area.top_left, self.style, TOP_LEFT).draw(display)?;
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
    use crate::colors::BLACK;
    use crate::styles::VALUE_STYLE;
    use crate::test_support::FrameBuffer;

    fn label() -> Label<10> { Label::new(Rectangle::new(Point::new(10, 10), Size::new(96, 24)), VALUE_STYLE) }

    #[test]
    fn test_set_number() {
        let mut label = label();
        label.set_number(0);
        assert_eq!(label.text(), "0");
        label.set_number(u32::MAX);
        assert_eq!(label.text(), "4294967295");
    }

    #[test]
    fn test_set_text_truncates() {
        let mut label: Label<4> = Label::new(Rectangle::new(Point::zero(), Size::new(40, 10)), VALUE_STYLE);
        label.set_text("RESET");
        assert_eq!(label.text(), "RESE");
    }

    #[test]
    fn test_same_text_keeps_clean() {
        let mut label = label();
        let mut fb = FrameBuffer::new();
        label.set_number(7);
        label.draw(&mut fb).unwrap();
        label.set_number(7);
        assert!(!label.is_dirty());
        label.set_number(8);
        assert!(label.is_dirty());
    }

    #[test]
    fn test_draw_clears_previous_text() {
        let mut label = label();
        let mut fb = FrameBuffer::new();
        label.set_text("88888");
        label.draw(&mut fb).unwrap();
        let wide = fb.count_in(&label.area, BLACK);
        assert!(wide > 0);

        label.set_text("1");
        label.draw(&mut fb).unwrap();
        let narrow = fb.count_in(&label.area, BLACK);
        assert!(narrow > 0);
        assert!(narrow < wide);
    }
}
