//! Open Road Engine
//!
//! The simulation core of the driving sandbox: vehicle dynamics (gears,
//! speed model, engine braking), the drive camera system, and the
//! platform-agnostic input layer. Everything here is deterministic and
//! window-system independent; the game layer on top wires it to a host.

pub mod camera;
pub mod input;
pub mod vehicle;

// Game-level modules shared with the binaries
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use camera::{CameraFrame, CameraMode, DriveCameraController};
pub use input::{InputState, TickInput};
pub use vehicle::{GearTable, VehicleState};
