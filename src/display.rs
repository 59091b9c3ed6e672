//! Simulated 320x240 panel.

use climate_panel_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use climate_panel_common::sensor::Device;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettings, OutputSettingsBuilder, SimulatorDisplay};

/// Off-screen framebuffer standing in for the ST7789.
pub struct SimulatedPanel {
    pub display: SimulatorDisplay<Rgb565>,
    scale: u32,
    online: bool,
}

impl SimulatedPanel {
    /// `online: false` stands in for a panel that rejected its init sequence.
    pub fn new(
        scale: u32,
        online: bool,
    ) -> Self {
        Self {
            display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            scale,
            online,
        }
    }

    /// Output settings for snapshots and the window.
    pub fn output_settings(&self) -> OutputSettings { OutputSettingsBuilder::new().scale(self.scale).build() }
}

impl Device for SimulatedPanel {
    fn name(&self) -> &'static str { "st7789-sim" }

    fn is_ready(&self) -> bool { self.online }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_matches_screen_size() {
        let panel = SimulatedPanel::new(2, true);
        assert!(panel.is_ready());
        assert_eq!(panel.display.size(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    }

    #[test]
    fn test_offline_panel_not_ready() {
        assert!(!SimulatedPanel::new(1, false).is_ready());
    }
}
