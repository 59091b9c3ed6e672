//! Widgets for the climate panel.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform
//! independence. Each widget keeps a dirty flag: setters mark it when the
//! visible state changes, `draw` clears it.

mod bar;
mod button;
mod chart;
mod label;
mod primitives;

pub use bar::Bar;
pub use button::Button;
pub use chart::{Axis, Chart, MAX_SERIES, Series, SeriesId};
pub use label::Label;
pub use primitives::{fill_vertical_gradient, lerp_rgb565};
