//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` values are `const` so widgets reference
//! them directly instead of building styles every frame.
//!
//! Scale labels contain a degree sign, so they use the ISO 8859-1 variant of
//! the 6x10 font. `ProFont` is only used for ASCII digits.

use embedded_graphics::mono_font::iso_8859_1::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_18_POINT;

use crate::colors::{BLACK, BLUE, RED, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Left-aligned, top baseline. Positions are the text's top-left corner.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned, middle baseline. Used for scale labels left of a bar.
pub const RIGHT_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Middle)
    .build();

/// Centered on both axes. Used for the button caption.
pub const CENTER_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Fonts
// =============================================================================

/// Small label font (6x10 pixels, ISO 8859-1 for the degree sign).
pub const LABEL_FONT: &MonoFont<'static> = &FONT_6X10;

/// Font of the elapsed-seconds value.
pub const VALUE_FONT: &MonoFont<'static> = &PROFONT_18_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small black text for scale labels.
pub const SCALE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, BLACK);

/// Red legend caption for the temperature series.
pub const TEMPERATURE_LEGEND_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, RED);

/// Blue legend caption for the humidity series.
pub const HUMIDITY_LEGEND_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, BLUE);

/// Black "Time:" caption.
pub const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, BLACK);

/// Black elapsed-seconds value.
pub const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(VALUE_FONT, BLACK);

/// White caption on the RESET button.
pub const BUTTON_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);
