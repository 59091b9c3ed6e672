//! Display driver for Pimoroni PIM715 Display Pack 2.8" (ST7789).
//!
//! Pin mapping for PIM715:
//! - CS: GPIO17
//! - DC: GPIO16
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20
//! - Reset: Tied to RUN pin (resets with Pico)

use climate_panel_common::StartupError;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::{Builder, NoResetPin};
use static_cell::StaticCell;

/// Bytes buffered by the SPI interface per transfer (one 320 px RGB565 row).
const SPI_BUFFER_LEN: usize = 640;

static SPI_BUFFER: StaticCell<[u8; SPI_BUFFER_LEN]> = StaticCell::new();

/// Display type alias for the ST7789 on PIM715 (no reset pin).
pub type Pim715Display = mipidsi::Display<
    SpiInterface<'static, ExclusiveDevice<Spi<'static, SPI0, Blocking>, Output<'static>, NoDelay>, Output<'static>>,
    ST7789,
    NoResetPin,
>;

/// Initialize the PIM715 display.
///
/// Fails with [`StartupError::DisplayNotReady`] if the panel does not accept
/// its init sequence. Must only be called once.
pub fn init_display(
    spi: Spi<'static, SPI0, Blocking>,
    cs: Output<'static>,
    dc: Output<'static>,
) -> Result<Pim715Display, StartupError> {
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).map_err(|_| StartupError::DisplayNotReady)?;
    let di = SpiInterface::new(spi_device, dc, SPI_BUFFER.init([0; SPI_BUFFER_LEN]));

    // Native panel is 240x320 (portrait), rotated 90° for 320x240 (landscape)
    Builder::new(ST7789, di)
        .display_size(240, 320)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut embassy_time::Delay)
        .map_err(|_| StartupError::DisplayNotReady)
}

/// SPI configuration for the ST7789 display.
///
/// The ST7789 supports up to 62.5MHz SPI clock.
/// We use 40MHz for reliable operation.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 40_000_000;
    config
}
