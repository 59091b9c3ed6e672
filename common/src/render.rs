//! Render state tracking for optimized display updates.
//!
//! The panel is mostly static: captions, scale labels and legends never
//! change after the first frame. [`RenderState`] tracks when that static
//! layer must be painted, while each widget tracks its own dirty flag.
//!
//! # Update Strategy
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Background, captions, scales | First frame / after clear | Draw-once tracking |
//! | Bars | When the integer value changes | Widget dirty flag |
//! | Chart, seconds label | Once per second | Widget dirty flag |
//! | RESET button | On focus change | Widget dirty flag |

/// Tracks whether the static layer needs painting.
pub struct RenderState {
    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    /// Whether the display was cleared externally since the last frame.
    display_cleared: bool,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            first_frame: true,
            display_cleared: false,
        }
    }

    /// Check if the background and static layer need drawing.
    #[inline]
    pub const fn need_full_redraw(&self) -> bool { self.first_frame || self.display_cleared }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Mark that the display contents were lost (e.g. the panel was re-initialized).
    #[inline]
    pub fn mark_display_cleared(&mut self) { self.display_cleared = true; }

    /// Finish a frame. The static layer is up to date afterwards.
    pub fn end_frame(&mut self) {
        self.first_frame = false;
        self.display_cleared = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
