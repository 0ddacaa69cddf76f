//! Vehicle Module
//!
//! The vehicle dynamics core: gear table, gear shifting, engine braking,
//! the speed/steering model, and the per-vehicle state they mutate.
//!
//! Update order per tick is fixed: gear shift, then speed (which applies any
//! active engine-braking decay first), then position integration. Each piece
//! is window-system and wall-clock agnostic; elapsed time is threaded through
//! every update.

pub mod engine_braking;
pub mod gearbox;
pub mod gears;
pub mod speed;
pub mod state;

pub use engine_braking::{
    ENGINE_BRAKING_DELAY, ENGINE_BRAKING_DURATION, ENGINE_BRAKING_STRENGTH,
    EngineBrakingController,
};
pub use gearbox::{FREE_SHIFT_SPEED, SHIFT_COOLDOWN, ShiftOutcome, update_gear_shift};
pub use gears::{
    FIRST_FORWARD_INDEX, FORWARD_GEAR_COUNT, GEAR_COUNT, GEAR_LABELS, GearBand, GearTable,
    MS_TO_KMH, NEUTRAL_INDEX, REVERSE_INDEX,
};
pub use speed::SpeedController;
pub use state::{MOVEMENT_SCALE, STEERING_DEADZONE, VehicleState};
