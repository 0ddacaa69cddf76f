//! Speed Shake
//!
//! High-speed camera shake: above a speed threshold the camera picks up small
//! rotational jitter that grows with speed. The jitter is a sum of sin/cos
//! products at incommensurate frequencies over a single advancing phase, so
//! it reads as noise without any RNG and stays deterministic for a given
//! phase and speed.

use glam::Vec3;

/// Speed (km/h) below which no shake is applied
pub const SHAKE_SPEED_THRESHOLD_KMH: f32 = 20.0;
/// Speed (km/h) at which shake reaches full intensity
pub const SHAKE_MAX_SPEED_KMH: f32 = 250.0;
/// Peak rotation offset per axis, radians
pub const SHAKE_MAX_ROTATION: f32 = 0.03;
/// Phase advance rate, radians per second
pub const SHAKE_PHASE_RATE: f32 = 4.8;

/// Accumulated shake phase. The rotation offsets themselves are computed
/// fresh each tick and never persist.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShakeState {
    phase: f32,
}

impl ShakeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the phase and compute this tick's rotation offsets
    /// (pitch, yaw, roll) in radians.
    ///
    /// Below [`SHAKE_SPEED_THRESHOLD_KMH`] this returns `Vec3::ZERO` and the
    /// phase holds still.
    pub fn update(&mut self, speed_kmh: f32, dt: f32) -> Vec3 {
        if speed_kmh <= SHAKE_SPEED_THRESHOLD_KMH {
            return Vec3::ZERO;
        }
        self.phase += SHAKE_PHASE_RATE * dt;

        let intensity = (speed_kmh / SHAKE_MAX_SPEED_KMH).min(1.0).powf(1.2);

        let p = self.phase;
        let amplitude = SHAKE_MAX_ROTATION * intensity * 0.8;
        Vec3::new(
            (p * 0.6).sin() * (p * 1.0).cos(),
            (p * 1.2).sin() * (p * 0.4).cos(),
            (p * 0.8).sin() * (p * 0.6).cos(),
        ) * amplitude
    }

    /// Reset the phase to zero.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
