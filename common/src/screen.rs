//! The climate panel screen.
//!
//! Owns every widget and knows the layout. Callers push new state through
//! setters and call [`Screen::draw`] once per tick; only changed widgets are
//! sent to the display.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{BACKGROUND, BLUE, PALETTE_BLUE, PALETTE_RED, RED, WHITE};
use crate::config::layout::{
    CHART_AREA,
    HUMIDITY_BAR_AREA,
    HUMIDITY_LEGEND_POS,
    HUMIDITY_RANGE,
    RESET_BUTTON_AREA,
    SCALE_LABEL_GAP,
    SCALE_STEPS,
    SECONDS_LABEL_AREA,
    TEMPERATURE_BAR_AREA,
    TEMPERATURE_LEGEND_POS,
    TEMPERATURE_RANGE,
    TIME_CAPTION_POS,
};
use crate::render::RenderState;
use crate::styles::{
    CAPTION_STYLE,
    HUMIDITY_LEGEND_STYLE,
    RIGHT_MIDDLE,
    SCALE_STYLE,
    TEMPERATURE_LEGEND_STYLE,
    TOP_LEFT,
    VALUE_STYLE,
};
use crate::widgets::{Axis, Bar, Button, Chart, Label, Series, SeriesId};

/// Capacity of the seconds label (fits `u32::MAX`).
const SECONDS_LABEL_LEN: usize = 10;

/// Interactive controls on the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Control {
    /// Resets the tick counter.
    Reset,
}

/// All widgets of the panel plus redraw bookkeeping.
pub struct Screen {
    temperature_bar: Bar,
    humidity_bar: Bar,
    chart: Chart,
    humidity_series: Option<SeriesId>,
    temperature_series: Option<SeriesId>,
    seconds: Label<SECONDS_LABEL_LEN>,
    reset_button: Button,
    render_state: RenderState,
}

impl Screen {
    /// Build the panel with empty bars, an empty chart and no seconds value.
    pub fn new() -> Self {
        let mut chart = Chart::new(CHART_AREA, HUMIDITY_RANGE, TEMPERATURE_RANGE);
        let humidity_series = chart.add_series(BLUE, Axis::Primary);
        let temperature_series = chart.add_series(RED, Axis::Secondary);

        Self {
            temperature_bar: Bar::new(TEMPERATURE_BAR_AREA, TEMPERATURE_RANGE, PALETTE_RED, PALETTE_BLUE),
            humidity_bar: Bar::new(HUMIDITY_BAR_AREA, HUMIDITY_RANGE, PALETTE_BLUE, WHITE),
            chart,
            humidity_series,
            temperature_series,
            seconds: Label::new(SECONDS_LABEL_AREA, VALUE_STYLE),
            reset_button: Button::new(RESET_BUTTON_AREA, "RESET"),
            render_state: RenderState::new(),
        }
    }

    // =========================================================================
    // State Updates
    // =========================================================================

    /// Show the latest readings on the bars.
    pub fn set_readings(
        &mut self,
        temperature: f32,
        humidity: f32,
    ) {
        self.temperature_bar.set_value(temperature);
        self.humidity_bar.set_value(humidity);
    }

    /// Append one point to each chart series.
    pub fn push_chart_point(
        &mut self,
        temperature: f32,
        humidity: f32,
    ) {
        if let Some(id) = self.temperature_series {
            self.chart.set_next_value(id, temperature);
        }
        if let Some(id) = self.humidity_series {
            self.chart.set_next_value(id, humidity);
        }
    }

    /// Show the elapsed-seconds value.
    pub fn set_elapsed_seconds(
        &mut self,
        seconds: u32,
    ) {
        self.seconds.set_number(seconds);
    }

    /// Move keypad focus. `None` removes it.
    pub fn set_focus(
        &mut self,
        control: Option<Control>,
    ) {
        self.reset_button.set_focused(control == Some(Control::Reset));
    }

    /// Control under `point`, if any.
    pub fn hit_test(
        &self,
        point: Point,
    ) -> Option<Control> {
        self.reset_button.contains(point).then_some(Control::Reset)
    }

    /// Repaint everything on the next [`draw`](Self::draw).
    pub fn invalidate(&mut self) { self.render_state.mark_display_cleared(); }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Temperature bar.
    pub const fn temperature_bar(&self) -> &Bar { &self.temperature_bar }

    /// Humidity bar.
    pub const fn humidity_bar(&self) -> &Bar { &self.humidity_bar }

    /// Chart widget.
    pub const fn chart(&self) -> &Chart { &self.chart }

    /// Temperature chart series.
    pub fn temperature_series(&self) -> Option<&Series> { self.temperature_series.and_then(|id| self.chart.series(id)) }

    /// Humidity chart series.
    pub fn humidity_series(&self) -> Option<&Series> { self.humidity_series.and_then(|id| self.chart.series(id)) }

    /// Text of the seconds label.
    pub fn seconds_text(&self) -> &str { self.seconds.text() }

    /// RESET button.
    pub const fn reset_button(&self) -> &Button { &self.reset_button }

    /// Redraw bookkeeping.
    pub const fn render_state(&self) -> &RenderState { &self.render_state }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw whatever changed since the last call.
    ///
    /// Returns `true` if anything was drawn.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
    ) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let full = self.render_state.need_full_redraw();
        if full {
            display.clear(BACKGROUND)?;
            draw_static_layer(display)?;
            self.temperature_bar.invalidate();
            self.humidity_bar.invalidate();
            self.chart.invalidate();
            self.seconds.invalidate();
            self.reset_button.invalidate();
        }

        let mut drew = full;
        if self.temperature_bar.is_dirty() {
            self.temperature_bar.draw(display)?;
            drew = true;
        }
        if self.humidity_bar.is_dirty() {
            self.humidity_bar.draw(display)?;
            drew = true;
        }
        if self.chart.is_dirty() {
            self.chart.draw(display)?;
            drew = true;
        }
        if self.seconds.is_dirty() {
            self.seconds.draw(display)?;
            drew = true;
        }
        if self.reset_button.is_dirty() {
            self.reset_button.draw(display)?;
            drew = true;
        }

        self.render_state.end_frame();
        Ok(drew)
    }
}

impl Default for Screen {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Static Layer
// =============================================================================

/// Captions, scale labels and legends. Painted once per full redraw.
fn draw_static_layer<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("Time:", TIME_CAPTION_POS, CAPTION_STYLE, TOP_LEFT).draw(display)?;
    draw_scale(display, &TEMPERATURE_BAR_AREA, TEMPERATURE_RANGE, "\u{b0}C")?;
    draw_scale(display, &HUMIDITY_BAR_AREA, HUMIDITY_RANGE, "%")?;
    Text::with_text_style("Temperature", TEMPERATURE_LEGEND_POS, TEMPERATURE_LEGEND_STYLE, TOP_LEFT).draw(display)?;
    Text::with_text_style("Humidity", HUMIDITY_LEGEND_POS, HUMIDITY_LEGEND_STYLE, TOP_LEFT).draw(display)?;
    Ok(())
}

/// Evenly spaced value labels to the left of a bar, highest at the top.
fn draw_scale<D>(
    display: &mut D,
    bar: &Rectangle,
    (min, max): (i32, i32),
    unit: &str,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let steps = SCALE_STEPS as i32 - 1;
    let x = bar.top_left.x - SCALE_LABEL_GAP;
    for i in 0..=steps {
        let value = max - (max - min) * i / steps;
        let y = bar.top_left.y + (bar.size.height as i32 - 1) * i / steps;

        let mut text: String<12> = String::new();
        let _ = write!(text, "{value}{unit}");
        draw_scale_label(display, text.as_str(), Point::new(x, y), SCALE_STYLE)?;
    }
    Ok(())
}

fn draw_scale_label<D>(
    display: &mut D,
    text: &str,
    position: Point,
    style: MonoTextStyle<'static, Rgb565>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, position, style, RIGHT_MIDDLE).draw(display)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, TRACK_GRAY};
    use crate::test_support::FrameBuffer;

    #[test]
    fn test_new_screen() {
        let screen = Screen::new();
        assert_eq!(screen.temperature_bar().value(), 0);
        assert_eq!(screen.humidity_bar().value(), 0);
        assert!(screen.temperature_series().unwrap().is_empty());
        assert!(screen.humidity_series().unwrap().is_empty());
        assert_eq!(screen.seconds_text(), "");
    }

    #[test]
    fn test_series_axes() {
        let screen = Screen::new();
        assert_eq!(screen.temperature_series().unwrap().axis(), Axis::Secondary);
        assert_eq!(screen.temperature_series().unwrap().color(), RED);
        assert_eq!(screen.humidity_series().unwrap().axis(), Axis::Primary);
        assert_eq!(screen.humidity_series().unwrap().color(), BLUE);
    }

    #[test]
    fn test_set_readings_updates_bars() {
        let mut screen = Screen::new();
        screen.set_readings(22.6, 51.3);
        assert_eq!(screen.temperature_bar().value(), 22);
        assert_eq!(screen.humidity_bar().value(), 51);
    }

    #[test]
    fn test_push_chart_point() {
        let mut screen = Screen::new();
        screen.push_chart_point(22.6, 51.3);
        assert_eq!(screen.temperature_series().unwrap().latest(), Some(22));
        assert_eq!(screen.humidity_series().unwrap().latest(), Some(51));
    }

    #[test]
    fn test_hit_test() {
        let screen = Screen::new();
        assert_eq!(screen.hit_test(RESET_BUTTON_AREA.center()), Some(Control::Reset));
        assert_eq!(screen.hit_test(CHART_AREA.center()), None);
        assert_eq!(screen.hit_test(Point::new(0, 0)), None);
    }

    #[test]
    fn test_first_draw_paints_everything() {
        let mut screen = Screen::new();
        let mut fb = FrameBuffer::new();
        assert_eq!(screen.draw(&mut fb), Ok(true));

        assert_eq!(fb.pixel(0, 239), BACKGROUND);
        // Empty bars show their track
        let bar = TEMPERATURE_BAR_AREA;
        assert_eq!(fb.pixel(bar.top_left.x, bar.top_left.y), TRACK_GRAY);
        // Scale labels and caption are drawn in black
        let scale_area = Rectangle::new(Point::new(0, bar.top_left.y - 6), Size::new(40, bar.size.height + 12));
        assert!(fb.count_in(&scale_area, BLACK) > 0);
        assert!(!screen.render_state().is_first_frame());
    }

    #[test]
    fn test_unchanged_screen_draws_nothing() {
        let mut screen = Screen::new();
        let mut fb = FrameBuffer::new();
        screen.draw(&mut fb).unwrap();
        fb.take_writes();

        assert_eq!(screen.draw(&mut fb), Ok(false));
        assert_eq!(fb.take_writes(), 0);
    }

    #[test]
    fn test_bar_change_redraws_only_that_bar() {
        let mut screen = Screen::new();
        let mut fb = FrameBuffer::new();
        screen.draw(&mut fb).unwrap();
        fb.take_writes();

        screen.set_readings(20.0, 0.0);
        assert_eq!(screen.draw(&mut fb), Ok(true));
        let bar = TEMPERATURE_BAR_AREA;
        assert_eq!(fb.take_writes(), (bar.size.width * bar.size.height) as usize);
        assert_eq!(fb.pixel(bar.top_left.x, bar.top_left.y + bar.size.height as i32 - 1), PALETTE_BLUE);
    }

    #[test]
    fn test_invalidate_forces_full_redraw() {
        let mut screen = Screen::new();
        let mut fb = FrameBuffer::new();
        screen.draw(&mut fb).unwrap();
        fb.take_writes();

        screen.invalidate();
        screen.draw(&mut fb).unwrap();
        assert!(fb.take_writes() >= (crate::config::SCREEN_WIDTH * crate::config::SCREEN_HEIGHT) as usize);
    }

    #[test]
    fn test_focus_redraws_button() {
        let mut screen = Screen::new();
        let mut fb = FrameBuffer::new();
        screen.draw(&mut fb).unwrap();

        screen.set_focus(Some(Control::Reset));
        assert!(screen.reset_button().is_focused());
        assert_eq!(screen.draw(&mut fb), Ok(true));
        screen.set_focus(None);
        assert!(!screen.reset_button().is_focused());
    }
}
