//! Gear Shift Controller
//!
//! State machine over the gear sequence. Accepts shift-up/shift-down input,
//! enforces a cooldown between shifts, and starts an engine-braking session
//! when a shift would strand the vehicle above the new gear's band ceiling.
//!
//! Shifts among R, N and 1 are always free, as is any shift while the vehicle
//! is effectively stopped. At most one shift is processed per tick; shift-up
//! wins if both directions are pressed.

use crate::vehicle::engine_braking::EngineBrakingController;
use crate::vehicle::gears::{FIRST_FORWARD_INDEX, GEAR_COUNT, GearTable, MS_TO_KMH};
use crate::vehicle::state::VehicleState;

/// Seconds between accepted gear shifts.
pub const SHIFT_COOLDOWN: f32 = 0.5;

/// Speed magnitude (m/s) below which any shift is free.
pub const FREE_SHIFT_SPEED: f32 = 0.1;

/// What a single gear-shift update did, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShiftOutcome {
    /// A gear change was applied this tick.
    pub shifted: bool,
    /// The shift started an engine-braking session.
    pub engine_braking_started: bool,
}

/// Process one tick of gear-shift input.
///
/// While the cooldown is running it is decremented and no shift is processed.
/// Otherwise a single shift moves the gear index by exactly one step. If the
/// vehicle is moving and the candidate gear's band ceiling lies below the
/// current speed, an engine-braking session targeting that ceiling is started
/// (replacing any in-flight session); the gear change applies regardless.
pub fn update_gear_shift(
    vehicle: &mut VehicleState,
    engine_braking: &mut EngineBrakingController,
    table: &GearTable,
    shift_up: bool,
    shift_down: bool,
    dt: f32,
) -> ShiftOutcome {
    if vehicle.shift_cooldown > 0.0 {
        vehicle.shift_cooldown = (vehicle.shift_cooldown - dt).max(0.0);
        return ShiftOutcome::default();
    }

    if shift_up && vehicle.gear_index < GEAR_COUNT - 1 {
        // Free among R/N/1 or when stopped; otherwise check the candidate band.
        let free = vehicle.speed.abs() < FREE_SHIFT_SPEED
            || vehicle.gear_index < FIRST_FORWARD_INDEX;
        let candidate = vehicle.gear_index + 1;
        let started = !free && maybe_start_engine_braking(vehicle, engine_braking, table, candidate);
        vehicle.gear_index = candidate;
        vehicle.shift_cooldown = SHIFT_COOLDOWN;
        return ShiftOutcome { shifted: true, engine_braking_started: started };
    }

    if shift_down && vehicle.gear_index > 0 {
        // The guard is one gear wider going down, so 1 -> N is also free.
        let free = vehicle.speed.abs() < FREE_SHIFT_SPEED
            || vehicle.gear_index <= FIRST_FORWARD_INDEX;
        let candidate = vehicle.gear_index - 1;
        let started = !free && maybe_start_engine_braking(vehicle, engine_braking, table, candidate);
        vehicle.gear_index = candidate;
        vehicle.shift_cooldown = SHIFT_COOLDOWN;
        return ShiftOutcome { shifted: true, engine_braking_started: started };
    }

    ShiftOutcome::default()
}

/// Start an engine-braking session if the candidate gear's band ceiling lies
/// below the current speed. Returns whether a session was started.
fn maybe_start_engine_braking(
    vehicle: &VehicleState,
    engine_braking: &mut EngineBrakingController,
    table: &GearTable,
    candidate: usize,
) -> bool {
    let Some(ceiling_kmh) = table.band_ceiling_kmh(candidate) else {
        return false;
    };
    let speed_kmh = vehicle.speed.abs() * MS_TO_KMH;
    if speed_kmh > ceiling_kmh {
        engine_braking.start(vehicle.speed.abs(), ceiling_kmh / MS_TO_KMH);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::gears::NEUTRAL_INDEX;

    const DT: f32 = 1.0 / 60.0;

    fn rig() -> (VehicleState, EngineBrakingController, GearTable) {
        (VehicleState::new(), EngineBrakingController::new(), GearTable::new())
    }

    #[test]
    fn test_shift_up_from_neutral() {
        let (mut v, mut eb, table) = rig();
        let outcome = update_gear_shift(&mut v, &mut eb, &table, true, false, DT);
        assert!(outcome.shifted);
        assert_eq!(v.gear_index, FIRST_FORWARD_INDEX);
        assert!((v.shift_cooldown - SHIFT_COOLDOWN).abs() < 1e-6);
    }

    #[test]
    fn test_cooldown_blocks_second_shift() {
        let (mut v, mut eb, table) = rig();
        update_gear_shift(&mut v, &mut eb, &table, true, false, DT);
        assert_eq!(v.gear_index, 2);

        // A second press a few ticks later is still within 0.5 s
        for _ in 0..10 {
            let outcome = update_gear_shift(&mut v, &mut eb, &table, true, false, DT);
            assert!(!outcome.shifted);
        }
        assert_eq!(v.gear_index, 2, "gear changed only once within the cooldown");
    }

    #[test]
    fn test_shift_accepted_after_cooldown_expires() {
        let (mut v, mut eb, table) = rig();
        update_gear_shift(&mut v, &mut eb, &table, true, false, DT);
        // 0.5 s of cooldown ticks
        for _ in 0..30 {
            update_gear_shift(&mut v, &mut eb, &table, false, false, DT);
        }
        let outcome = update_gear_shift(&mut v, &mut eb, &table, true, false, DT);
        assert!(outcome.shifted);
        assert_eq!(v.gear_index, 3);
    }

    #[test]
    fn test_up_wins_when_both_directions_pressed() {
        let (mut v, mut eb, table) = rig();
        update_gear_shift(&mut v, &mut eb, &table, true, true, DT);
        assert_eq!(v.gear_index, NEUTRAL_INDEX + 1);
    }

    #[test]
    fn test_no_shift_past_sequence_ends() {
        let (mut v, mut eb, table) = rig();
        v.gear_index = GEAR_COUNT - 1;
        let outcome = update_gear_shift(&mut v, &mut eb, &table, true, false, DT);
        assert!(!outcome.shifted);
        assert_eq!(v.gear_index, GEAR_COUNT - 1);

        v.gear_index = 0;
        let outcome = update_gear_shift(&mut v, &mut eb, &table, false, true, DT);
        assert!(!outcome.shifted);
        assert_eq!(v.gear_index, 0);
    }

    #[test]
    fn test_single_step_per_tick() {
        let (mut v, mut eb, table) = rig();
        // Holding shift-up for a full second moves at most two steps
        // (one immediately, one after the 0.5 s cooldown).
        for _ in 0..60 {
            update_gear_shift(&mut v, &mut eb, &table, true, false, DT);
        }
        assert_eq!(v.gear_index, NEUTRAL_INDEX + 2);
    }

    #[test]
    fn test_free_shifts_among_low_gears_never_brake() {
        let (mut v, mut eb, table) = rig();
        v.gear_index = FIRST_FORWARD_INDEX;
        v.speed = 12.0; // 43 km/h, moving
        let outcome = update_gear_shift(&mut v, &mut eb, &table, false, true, DT);
        assert!(outcome.shifted);
        assert!(!outcome.engine_braking_started);
        assert_eq!(v.gear_index, NEUTRAL_INDEX);
        assert!(!eb.is_active());
    }

    #[test]
    fn test_downshift_above_band_ceiling_starts_engine_braking() {
        let (mut v, mut eb, table) = rig();
        v.gear_index = 7; // gear 6
        v.speed = 69.44; // 250 km/h
        let outcome = update_gear_shift(&mut v, &mut eb, &table, false, true, DT);
        assert!(outcome.shifted);
        assert!(outcome.engine_braking_started);
        assert_eq!(v.gear_index, 6);
        assert!(eb.is_active());
        // Gear 5 band ceiling is 210 km/h = 58.33 m/s
        assert!((eb.target_speed() - 210.0 / 3.6).abs() < 0.01);
    }

    #[test]
    fn test_upshift_within_band_does_not_brake() {
        let (mut v, mut eb, table) = rig();
        v.gear_index = 2; // gear 1
        v.speed = 12.0; // 43 km/h, below gear 2's 90 km/h ceiling
        let outcome = update_gear_shift(&mut v, &mut eb, &table, true, false, DT);
        assert!(outcome.shifted);
        assert!(!outcome.engine_braking_started);
        assert!(!eb.is_active());
    }

    #[test]
    fn test_stopped_vehicle_shifts_freely_in_any_gear() {
        let (mut v, mut eb, table) = rig();
        v.gear_index = 7;
        v.speed = 0.0;
        let outcome = update_gear_shift(&mut v, &mut eb, &table, false, true, DT);
        assert!(outcome.shifted);
        assert!(!outcome.engine_braking_started);
    }
}
