//! Application configuration.
//!
//! - `layout`: Display dimensions and widget geometry
//! - `timing`: Loop period, update cadence and sensor timing

pub mod layout;
pub mod timing;

// Re-export the constants most callers need at config level
pub use layout::{SCREEN_HEIGHT, SCREEN_WIDTH};
pub use timing::{TICK_PERIOD_MS, TICKS_PER_UPDATE};
