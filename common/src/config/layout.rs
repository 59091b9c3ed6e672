//! Display and layout configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! Widget rectangles are derived from a handful of anchors at compile time as
//! `const`, so the screen never recomputes geometry per frame.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │ Time: 12                                  [ RESET ]   │
//! │ 40°C ▐▌  100% ▐▌   Temperature                        │
//! │      ▐▌       ▐▌  ┌───────────────────────────┐       │
//! │ 20°C ▐▌   50% ▐▌  │        chart 180x150      │       │
//! │      ▐▌       ▐▌  └───────────────────────────┘       │
//! │  0°C ▐▌    0% ▐▌   Humidity                           │
//! └───────────────────────────────────────────────────────┘
//! ```

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 on Pimoroni PIM715: 320x240)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Header Row
// =============================================================================

/// Top-left of the "Time:" caption.
pub const TIME_CAPTION_POS: Point = Point::new(8, 10);

/// Area reserved for the elapsed-seconds value (cleared on every update).
pub const SECONDS_LABEL_AREA: Rectangle = Rectangle::new(Point::new(70, 6), Size::new(96, 24));

/// On-screen RESET control.
pub const RESET_BUTTON_AREA: Rectangle = Rectangle::new(Point::new(232, 6), Size::new(80, 28));

// =============================================================================
// Bars
// =============================================================================

/// Bar indicator width in pixels.
pub const BAR_WIDTH: u32 = 16;

/// Bar indicator height in pixels.
pub const BAR_HEIGHT: u32 = 180;

/// Y coordinate of the top edge of both bars.
pub const BAR_TOP: i32 = 48;

/// Temperature bar (left).
pub const TEMPERATURE_BAR_AREA: Rectangle = Rectangle::new(Point::new(44, BAR_TOP), Size::new(BAR_WIDTH, BAR_HEIGHT));

/// Humidity bar (right of the temperature bar).
pub const HUMIDITY_BAR_AREA: Rectangle = Rectangle::new(Point::new(106, BAR_TOP), Size::new(BAR_WIDTH, BAR_HEIGHT));

/// Gap between a scale label's right edge and its bar.
pub const SCALE_LABEL_GAP: i32 = 4;

/// Number of scale labels beside each bar (top, three intermediate, bottom).
pub const SCALE_STEPS: usize = 5;

/// Temperature range shown by the bar and the secondary chart axis (°C).
pub const TEMPERATURE_RANGE: (i32, i32) = (0, 40);

/// Humidity range shown by the bar and the primary chart axis (%RH).
pub const HUMIDITY_RANGE: (i32, i32) = (0, 100);

// =============================================================================
// Chart
// =============================================================================

/// Chart width in pixels.
pub const CHART_WIDTH: u32 = 180;

/// Chart height in pixels.
pub const CHART_HEIGHT: u32 = 150;

/// Chart frame.
pub const CHART_AREA: Rectangle = Rectangle::new(Point::new(134, 62), Size::new(CHART_WIDTH, CHART_HEIGHT));

/// Points kept per chart series (oldest shifted out).
pub const CHART_POINT_COUNT: usize = 10;

/// Horizontal division lines inside the chart.
pub const CHART_H_DIVISIONS: u32 = 3;

/// Vertical division lines inside the chart.
pub const CHART_V_DIVISIONS: u32 = 5;

/// Top-left of the temperature legend caption (above the chart).
pub const TEMPERATURE_LEGEND_POS: Point = Point::new(134, 48);

/// Top-left of the humidity legend caption (below the chart).
pub const HUMIDITY_LEGEND_POS: Point = Point::new(134, 218);
