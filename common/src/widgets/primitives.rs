//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Linear interpolation between two Rgb565 colors at `num / den`.
///
/// Integer math per channel; `den == 0` returns `from`.
pub fn lerp_rgb565(
    from: Rgb565,
    to: Rgb565,
    num: u32,
    den: u32,
) -> Rgb565 {
    if den == 0 {
        return from;
    }
    let num = num.min(den) as i32;
    let den = den as i32;
    let mix = |a: u8, b: u8| -> u8 {
        let a = i32::from(a);
        let b = i32::from(b);
        (a + (b - a) * num / den) as u8
    };
    Rgb565::new(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

/// Fill `area` with a top-to-bottom gradient, one row at a time.
pub fn fill_vertical_gradient<D>(
    display: &mut D,
    area: &Rectangle,
    top: Rgb565,
    bottom: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let height = area.size.height;
    if height == 0 || area.size.width == 0 {
        return Ok(());
    }
    let last_row = height - 1;
    for row in 0..height {
        let color = lerp_rgb565(top, bottom, row, last_row);
        let line = Rectangle::new(
            Point::new(area.top_left.x, area.top_left.y + row as i32),
            Size::new(area.size.width, 1),
        );
        display.fill_solid(&line, color)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, BLUE, RED, WHITE};
    use crate::test_support::FrameBuffer;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb565(RED, BLUE, 0, 10), RED);
        assert_eq!(lerp_rgb565(RED, BLUE, 10, 10), BLUE);
        assert_eq!(lerp_rgb565(RED, BLUE, 20, 10), BLUE);
        assert_eq!(lerp_rgb565(RED, BLUE, 3, 0), RED);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = lerp_rgb565(BLACK, WHITE, 1, 2);
        assert_eq!(mid, Rgb565::new(15, 31, 15));
    }

    #[test]
    fn test_gradient_rows() {
        let mut fb = FrameBuffer::new();
        let area = Rectangle::new(Point::new(10, 10), Size::new(4, 5));
        fill_vertical_gradient(&mut fb, &area, RED, BLUE).unwrap();
        assert_eq!(fb.pixel(10, 10), RED);
        assert_eq!(fb.pixel(13, 14), BLUE);
        assert_eq!(fb.take_writes(), 20);
    }

    #[test]
    fn test_gradient_empty_area() {
        let mut fb = FrameBuffer::new();
        let area = Rectangle::new(Point::new(10, 10), Size::new(4, 0));
        fill_vertical_gradient(&mut fb, &area, RED, BLUE).unwrap();
        assert_eq!(fb.take_writes(), 0);
    }
}
