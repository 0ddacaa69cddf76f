//! Input Module
//!
//! Platform-agnostic input handling for the drive controls and the look-lock
//! mouse. Decoupled from any specific windowing system: the host feeds key
//! and mouse events in, and once per tick takes a [`TickInput`] snapshot that
//! the simulation consumes.
//!
//! # Example
//!
//! ```rust,ignore
//! use open_road_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//!
//! // Event loop: forward key and mouse events
//! input.keyboard.handle_key(KeyCode::W, true);
//! input.mouse.set_engaged(true);
//! input.mouse.accumulate_delta(12.0);
//!
//! // Update loop: snapshot once per tick
//! let tick = input.snapshot();
//! assert!(tick.drive.throttle);
//! ```

pub mod keyboard;
pub mod mouse_look;

pub use keyboard::{DriveKeys, KeyCode, KeyboardState};
pub use mouse_look::LookLockMouse;

/// One tick's worth of input, consumed by the simulation.
///
/// Drive keys are the held state at snapshot time; the look delta and the
/// two commands are consumed from their accumulators, so taking a second
/// snapshot without new events yields no delta and no commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held drive controls.
    pub drive: DriveKeys,
    /// Horizontal look-lock mouse delta accumulated since the last tick.
    pub look_delta_x: f32,
    /// Whether look-lock was engaged at snapshot time.
    pub look_locked: bool,
    /// Edge-triggered: cycle the camera mode.
    pub switch_camera: bool,
    /// Edge-triggered: return the vehicle to the origin.
    pub reset_vehicle: bool,
}

/// Combined input state for keyboard and look-lock mouse.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: LookLockMouse,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the per-tick snapshot, consuming edge commands and mouse delta.
    pub fn snapshot(&mut self) -> TickInput {
        TickInput {
            drive: self.keyboard.drive,
            look_delta_x: self.mouse.consume_delta(),
            look_locked: self.mouse.is_engaged(),
            switch_camera: self.keyboard.take_switch_camera(),
            reset_vehicle: self.keyboard.take_reset_vehicle(),
        }
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.reset();
    }
}
