//! Tick counter shared between the main loop and the reset handlers.
//!
//! The main loop increments the counter once per iteration; button and GUI
//! handlers store zero from interrupt-driven tasks. Every access is a single
//! atomic word operation, so no lock is needed.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::config::TICKS_PER_UPDATE;

/// Loop iteration counter, reset to zero by any input source.
pub struct TickCounter {
    count: AtomicU32,
}

impl TickCounter {
    /// Create a counter at zero. `const` so it can back a `static`.
    pub const fn new() -> Self {
        Self {
            count: AtomicU32::new(0),
        }
    }

    /// Current tick count.
    #[inline]
    pub fn get(&self) -> u32 { self.count.load(Ordering::Relaxed) }

    /// Advance by one tick, wrapping on overflow. Returns the new count.
    #[inline]
    pub fn increment(&self) -> u32 { self.count.fetch_add(1, Ordering::Relaxed).wrapping_add(1) }

    /// Set the counter back to zero.
    #[inline]
    pub fn reset(&self) { self.count.store(0, Ordering::Relaxed); }
}

impl Default for TickCounter {
    fn default() -> Self { Self::new() }
}

/// True on ticks that push a chart point and refresh the seconds label.
#[inline]
pub const fn is_update_tick(count: u32) -> bool { count % TICKS_PER_UPDATE == 0 }

/// Elapsed whole seconds represented by `count` ticks.
#[inline]
pub const fn elapsed_seconds(count: u32) -> u32 { count / TICKS_PER_UPDATE }

// =============================================================================
// Unit Tests
// =============================================================================
