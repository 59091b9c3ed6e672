//! Color constants for the climate panel.
//!
//! The panel uses a light theme: white background, black text, red for
//! temperature and blue for humidity.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This format is native to the ST7789 and requires no conversion when
//! writing to the display.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Used for text and scale labels.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Screen background and button caption.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Temperature chart series and legend.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure blue (0, 0, 31). Humidity chart series and legend.
pub const BLUE: Rgb565 = Rgb565::BLUE;

// =============================================================================
// Palette Colors (Material palette "main" shades)
// =============================================================================

/// Palette red (#F44336). Top of the temperature bar gradient.
pub const PALETTE_RED: Rgb565 = Rgb565::new(30, 16, 6);

/// Palette blue (#2196F3). Humidity bar, bottom of the temperature bar, RESET button.
pub const PALETTE_BLUE: Rgb565 = Rgb565::new(4, 37, 30);

// =============================================================================
// Neutral Shades
// =============================================================================

/// Light gray for bar tracks (unfilled part of a bar).
pub const TRACK_GRAY: Rgb565 = Rgb565::new(27, 54, 27);

/// Gray for chart borders and division lines.
pub const GRID_GRAY: Rgb565 = Rgb565::new(24, 48, 24);

/// Dark gray outline drawn around the focused control.
pub const FOCUS_GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Screen background.
pub const BACKGROUND: Rgb565 = WHITE;
