//! Engine Braking Controller
//!
//! Timed sub-state machine that decays speed toward a new gear's band ceiling
//! after a shift strands the vehicle above it. Produces a smooth, eased
//! "forced downshift" deceleration instead of an instant clamp.
//!
//! The session tracks its own elapsed time from the per-tick `dt`, so the
//! controller is deterministic and needs no wall clock.

/// Base deceleration strength in m/s². Scales up with session progress.
pub const ENGINE_BRAKING_STRENGTH: f32 = 0.3;

/// Grace period after activation before any deceleration applies, in seconds.
pub const ENGINE_BRAKING_DELAY: f32 = 0.1;

/// Nominal duration of the eased decay window, in seconds.
pub const ENGINE_BRAKING_DURATION: f32 = 3.0;

/// Engine braking session state. `Inactive -> Active -> Inactive`.
///
/// Activated only by the gear shift controller; a new shift replaces any
/// in-flight session atomically.
#[derive(Clone, Debug, Default)]
pub struct EngineBrakingController {
    active: bool,
    /// Seconds since activation, accumulated from tick deltas.
    elapsed: f32,
    /// Speed magnitude (m/s) at activation.
    initial_speed: f32,
    /// Speed magnitude (m/s) to decay toward: the new gear's band ceiling.
    target_speed: f32,
}

impl EngineBrakingController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Target speed magnitude of the current session, in m/s.
    #[inline]
    pub fn target_speed(&self) -> f32 {
        self.target_speed
    }

    /// Start a session, replacing any in-flight one.
    ///
    /// Both speeds are magnitudes in m/s.
    pub fn start(&mut self, initial_speed: f32, target_speed: f32) {
        self.active = true;
        self.elapsed = 0.0;
        self.initial_speed = initial_speed;
        self.target_speed = target_speed;
    }

    /// Cancel the session without finishing the decay.
    pub fn cancel(&mut self) {
        self.active = false;
        self.elapsed = 0.0;
    }

    /// Apply one tick of engine braking to a signed speed, returning the new
    /// speed. No-op while inactive or within the grace period.
    ///
    /// The decay eases with cubic ease-out: the per-tick target descends from
    /// `initial_speed` toward `target_speed`, and the deceleration rate grows
    /// from `strength` to `2 * strength` over the session. Speed never crosses
    /// the per-tick target, so `|speed| - target_speed` is non-increasing.
    /// Once the magnitude reaches the target the session deactivates.
    pub fn apply(&mut self, speed: f32, dt: f32) -> f32 {
        if !self.active {
            return speed;
        }

        self.elapsed += dt;
        if self.elapsed < ENGINE_BRAKING_DELAY {
            return speed;
        }

        if speed.abs() - self.target_speed <= 0.0 {
            self.active = false;
            return speed;
        }

        let progress = (self.elapsed / ENGINE_BRAKING_DURATION).min(1.0);
        let ease = 1.0 - (1.0 - progress).powi(3);
        let current_target =
            self.initial_speed - (self.initial_speed - self.target_speed) * ease;
        let deceleration = ENGINE_BRAKING_STRENGTH * (1.0 + progress);

        if speed > 0.0 {
            (speed - deceleration * dt).max(current_target)
        } else {
            (speed + deceleration * dt).min(-current_target)
        }
    }
}
