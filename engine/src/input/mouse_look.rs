//! Look-Lock Mouse Tracker
//!
//! Captured-mouse input with delta accumulation for the look-around camera.
//! While look-lock is engaged (cursor captured), horizontal mouse deltas
//! accumulate between frames and are consumed atomically once per tick.

/// Look-lock mouse state with horizontal delta accumulation.
///
/// - **Delta accumulation**: raw deltas accumulate until consumed
/// - **Engagement tracking**: deltas only accumulate while look-lock is on
/// - **Atomic consumption**: `consume_delta()` returns the total and resets it
#[derive(Debug, Clone, Copy, Default)]
pub struct LookLockMouse {
    /// Accumulated horizontal delta since last consume, in device units.
    delta_x: f32,
    /// Whether look-lock is currently engaged (cursor captured).
    engaged: bool,
}

impl LookLockMouse {
    /// Create a look-lock tracker with zero delta and look-lock disengaged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw horizontal mouse motion.
    ///
    /// Call from the event loop on every raw mouse motion event. Motion
    /// received while look-lock is disengaged is dropped, matching an
    /// uncaptured OS cursor.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32) {
        if self.engaged {
            self.delta_x += dx;
        }
    }

    /// Consume the accumulated delta, returning it and resetting to zero.
    #[inline]
    pub fn consume_delta(&mut self) -> f32 {
        std::mem::take(&mut self.delta_x)
    }

    /// Engage or disengage look-lock. Disengaging drops any pending delta.
    pub fn set_engaged(&mut self, engaged: bool) {
        self.engaged = engaged;
        if !engaged {
            self.delta_x = 0.0;
        }
    }

    /// Whether look-lock is currently engaged.
    #[inline]
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Reset to the default state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
