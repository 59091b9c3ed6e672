//! Loop timing and sensor sampling constants.

/// Main loop period in milliseconds (one tick).
pub const TICK_PERIOD_MS: u64 = 10;

/// Ticks between chart/seconds-label updates (~1 s at [`TICK_PERIOD_MS`]).
pub const TICKS_PER_UPDATE: u32 = 100;

/// Minimum time between two DHT22 conversions.
/// Fetches inside this window are rejected with `SensorError::Busy`.
pub const DHT22_MIN_SAMPLE_INTERVAL_MS: u64 = 2_000;
