//! Speed Controller
//!
//! Converts throttle/brake/steer input into the vehicle's new signed speed and
//! heading, per gear kind:
//!
//! - **Reverse**: throttle accelerates negative along a diminishing curve,
//!   brake pulls toward zero at a speed-scaled rate, coasting drains gently.
//! - **Neutral**: idle drag toward zero from either sign; input has no effect.
//! - **Forward gears**: acceleration shaped by the gear's efficiency band and
//!   a top-end diminishing curve; braking and coasting use speed-bracketed
//!   multipliers.
//!
//! An active engine-braking session applies first, additively with the
//! player-driven delta in the same tick. All rates are per-second, so the
//! model is frame-rate independent.

use crate::input::keyboard::DriveKeys;
use crate::vehicle::engine_braking::EngineBrakingController;
use crate::vehicle::gears::{GearTable, MS_TO_KMH};
use crate::vehicle::state::{STEERING_DEADZONE, VehicleState};

/// Speed-bracketed multiplier table: (upper bound in km/h, multiplier).
/// The last entry is the catch-all for speeds at or above every bound.
type SpeedBrackets = [(f32, f32); 5];

/// Braking effectiveness grows with speed (aerodynamic + friction braking).
const BRAKING_BRACKETS: SpeedBrackets =
    [(30.0, 1.8), (60.0, 2.2), (100.0, 2.7), (150.0, 3.2), (f32::INFINITY, 3.7)];

/// Coasting drag falls off with speed.
const COASTING_BRACKETS: SpeedBrackets =
    [(30.0, 0.25), (60.0, 0.20), (100.0, 0.15), (150.0, 0.10), (f32::INFINITY, 0.08)];

fn bracket_multiplier(brackets: &SpeedBrackets, speed_kmh: f32) -> f32 {
    for &(bound, multiplier) in brackets {
        if speed_kmh < bound {
            return multiplier;
        }
    }
    brackets[brackets.len() - 1].1
}

/// Diminishing top-end acceleration by speed ratio (|speed| / gear ceiling).
fn acceleration_curve(speed_ratio: f32) -> f32 {
    if speed_ratio < 0.1 {
        0.8
    } else if speed_ratio < 0.4 {
        1.0
    } else if speed_ratio < 0.7 {
        0.7
    } else if speed_ratio < 0.88 {
        0.4
    } else if speed_ratio < 0.98 {
        0.2
    } else {
        0.1
    }
}

/// Tunable speed model. Defaults match the stock vehicle.
#[derive(Clone, Debug)]
pub struct SpeedController {
    /// Peak forward acceleration in m/s² before curve shaping.
    pub base_acceleration: f32,
    /// Base braking deceleration in m/s² before bracket multipliers.
    pub brake_deceleration: f32,
    /// Reverse acceleration in m/s² before curve shaping.
    pub reverse_acceleration: f32,
    /// Turn rate at low speed, rad/s.
    pub max_turn_rate: f32,
    /// Turn rate at and above the falloff speed, rad/s.
    pub min_turn_rate: f32,
    /// Speed (km/h) at which the turn rate bottoms out.
    pub turn_falloff_kmh: f32,
}

impl Default for SpeedController {
    fn default() -> Self {
        Self {
            base_acceleration: 10.0,
            brake_deceleration: 5.0,
            reverse_acceleration: 5.0,
            max_turn_rate: 1.8,
            min_turn_rate: 0.3,
            turn_falloff_kmh: 100.0,
        }
    }
}

impl SpeedController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn rate (rad/s) at the given speed: full agility at a standstill,
    /// linearly falling to the minimum at `turn_falloff_kmh`.
    pub fn turn_rate(&self, speed_kmh: f32) -> f32 {
        let t = (speed_kmh.abs() / self.turn_falloff_kmh).min(1.0);
        self.max_turn_rate + (self.min_turn_rate - self.max_turn_rate) * t
    }

    /// Run one tick of the speed model: engine braking first, then steering,
    /// then the per-gear-kind speed update.
    pub fn update(
        &self,
        vehicle: &mut VehicleState,
        engine_braking: &mut EngineBrakingController,
        table: &GearTable,
        keys: &DriveKeys,
        dt: f32,
    ) {
        vehicle.speed = engine_braking.apply(vehicle.speed, dt);

        self.steer(vehicle, keys, dt);

        if table.is_reverse(vehicle.gear_index) {
            self.update_reverse(vehicle, table, keys, dt);
        } else if table.is_neutral(vehicle.gear_index) {
            self.update_neutral(vehicle, dt);
        } else {
            self.update_forward(vehicle, table, keys, dt);
        }
    }

    fn steer(&self, vehicle: &mut VehicleState, keys: &DriveKeys, dt: f32) {
        if vehicle.speed.abs() <= STEERING_DEADZONE {
            return;
        }
        let rate = self.turn_rate(vehicle.speed.abs() * MS_TO_KMH);
        if keys.steer_left {
            vehicle.yaw -= rate * dt;
        }
        if keys.steer_right {
            vehicle.yaw += rate * dt;
        }
    }

    fn update_reverse(
        &self,
        vehicle: &mut VehicleState,
        table: &GearTable,
        keys: &DriveKeys,
        dt: f32,
    ) {
        let reverse_max = table.reverse_top_speed;
        if keys.throttle {
            // Diminishing acceleration as reverse speed builds. The ratio is
            // clamped so a forward-rolling vehicle in R decays sanely instead
            // of feeding a negative base into powf.
            let ratio = (vehicle.speed.abs() / reverse_max).min(1.0);
            let curve = (1.0 - ratio).powf(1.1);
            vehicle.speed =
                (vehicle.speed - self.reverse_acceleration * curve * dt).max(-reverse_max);
        } else if keys.brake {
            let deceleration =
                self.brake_deceleration * (1.0 + vehicle.speed.abs() / reverse_max);
            vehicle.speed = (vehicle.speed + deceleration * dt).min(0.0);
        } else if vehicle.speed < 0.0 {
            vehicle.speed = (vehicle.speed + self.brake_deceleration * 0.1 * dt).min(0.0);
        }
    }

    fn update_neutral(&self, vehicle: &mut VehicleState, dt: f32) {
        // Idle drag toward zero from either sign; throttle has nothing to push.
        let drain = self.brake_deceleration * 0.1 * dt;
        if vehicle.speed > 0.0 {
            vehicle.speed = (vehicle.speed - drain).max(0.0);
        } else if vehicle.speed < 0.0 {
            vehicle.speed = (vehicle.speed + drain).min(0.0);
        }
    }

    fn update_forward(
        &self,
        vehicle: &mut VehicleState,
        table: &GearTable,
        keys: &DriveKeys,
        dt: f32,
    ) {
        let ceiling = table.accel_ceiling(vehicle.gear_index);
        let speed_kmh = vehicle.speed.abs() * MS_TO_KMH;

        if keys.throttle {
            // Throttle only ever pushes toward the ceiling; pulling an
            // over-revved vehicle back down is engine braking's job.
            if vehicle.speed < ceiling {
                let efficiency = table.efficiency(vehicle.gear_index, speed_kmh);
                let curve = acceleration_curve(vehicle.speed.abs() / ceiling);
                let acceleration = self.base_acceleration * curve * efficiency;
                vehicle.speed = (vehicle.speed + acceleration * dt).min(ceiling);
            }
        } else if keys.brake {
            let multiplier = bracket_multiplier(&BRAKING_BRACKETS, speed_kmh);
            vehicle.speed =
                (vehicle.speed - self.brake_deceleration * multiplier * dt).max(0.0);
        } else if vehicle.speed > 0.0 {
            let multiplier = bracket_multiplier(&COASTING_BRACKETS, speed_kmh);
            vehicle.speed =
                (vehicle.speed - self.brake_deceleration * multiplier * dt).max(0.0);
        }
    }
}
