//! Vehicle State
//!
//! The per-vehicle mutable state: position, heading, signed speed, current
//! gear, and the gear-shift cooldown timer. Mutated once per tick by the gear
//! shift and speed controllers, then advanced along its heading.
//!
//! Heading convention matches the camera code: yaw rotates about +Y and
//! `forward = (sin yaw, 0, -cos yaw)`, so yaw 0 faces -Z and increasing yaw
//! turns right.

use glam::Vec3;

use crate::vehicle::gears::{GearTable, MS_TO_KMH, NEUTRAL_INDEX};

/// Below this speed magnitude (m/s) the vehicle neither steers nor moves.
pub const STEERING_DEADZONE: f32 = 0.1;

/// World-units-per-meter scale applied when integrating position.
pub const MOVEMENT_SCALE: f32 = 3.8;

/// Mutable state of one controlled vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleState {
    /// World position.
    pub position: Vec3,
    /// Heading yaw in radians, about +Y.
    pub yaw: f32,
    /// Signed speed in m/s. Positive = forward, negative = reverse.
    pub speed: f32,
    /// Index into the gear sequence (R, N, 1..6). Starts at neutral.
    pub gear_index: usize,
    /// Remaining seconds before another gear shift is accepted.
    pub shift_cooldown: f32,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleState {
    /// Create a vehicle at the origin, stopped, in neutral.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            speed: 0.0,
            gear_index: NEUTRAL_INDEX,
            shift_cooldown: 0.0,
        }
    }

    /// Unit forward vector derived from the heading yaw.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Signed speed in km/h.
    #[inline]
    pub fn speed_kmh(&self) -> f32 {
        self.speed * MS_TO_KMH
    }

    /// Display label for the current gear.
    #[inline]
    pub fn gear_label(&self, table: &GearTable) -> &'static str {
        table.label(self.gear_index)
    }

    /// Return the vehicle to the origin: position zeroed, heading reset,
    /// stopped, in neutral, with no pending shift cooldown.
    pub fn reset(&mut self) {
        self.position = Vec3::ZERO;
        self.yaw = 0.0;
        self.speed = 0.0;
        self.gear_index = NEUTRAL_INDEX;
        self.shift_cooldown = 0.0;
    }

    /// Advance position along the heading.
    ///
    /// Movement only happens above the speed deadzone, so a near-stopped
    /// vehicle does not creep.
    pub fn advance(&mut self, dt: f32, movement_scale: f32) {
        if self.speed.abs() > STEERING_DEADZONE {
            self.position += self.forward() * self.speed * dt * movement_scale;
        }
    }

    /// Clamp drifted state back into its legal envelope.
    ///
    /// Non-finite speed collapses to 0 and an out-of-range gear index clamps
    /// to the nearest legal value. Anomalies degrade to safe defaults instead
    /// of failing the tick.
    pub fn sanitize(&mut self, table: &GearTable) {
        if !self.speed.is_finite() {
            self.speed = 0.0;
        }
        self.gear_index = table.clamp_index(self.gear_index);
        if self.shift_cooldown < 0.0 || !self.shift_cooldown.is_finite() {
            self.shift_cooldown = 0.0;
        }
    }
}
