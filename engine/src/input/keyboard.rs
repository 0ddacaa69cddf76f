//! Keyboard Input Module
//!
//! Keyboard state tracking for the drive controls. Decoupled from winit:
//! the host translates platform key events into the generic [`KeyCode`] here
//! (the bindings layer in the game config does that translation).

/// Generic key codes for drive input, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Drive keys
    W,
    A,
    S,
    D,
    Q,
    E,
    ShiftLeft,
    ShiftRight,

    // Commands
    V,
    R,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks which drive controls are currently held.
///
/// These are level-triggered: true for every tick the key stays down,
/// allowing smooth continuous control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveKeys {
    /// W - throttle (accelerate forward, or reverse harder in R)
    pub throttle: bool,
    /// S - brake (or reverse brake in R)
    pub brake: bool,
    /// A - steer left
    pub steer_left: bool,
    /// D - steer right
    pub steer_right: bool,
    /// E - shift up one gear
    pub shift_up: bool,
    /// Q - shift down one gear
    pub shift_down: bool,
    /// Shift - freecam speed boost
    pub boost: bool,
}

impl DriveKeys {
    /// Create a drive-key state with every control released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the held state from a key press/release.
    ///
    /// Returns `true` if the key maps to a drive control.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => {
                self.throttle = pressed;
                true
            }
            KeyCode::S => {
                self.brake = pressed;
                true
            }
            KeyCode::A => {
                self.steer_left = pressed;
                true
            }
            KeyCode::D => {
                self.steer_right = pressed;
                true
            }
            KeyCode::E => {
                self.shift_up = pressed;
                true
            }
            KeyCode::Q => {
                self.shift_down = pressed;
                true
            }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.boost = pressed;
                true
            }
            _ => false,
        }
    }

    /// Whether any drive control is currently held.
    pub fn any_pressed(&self) -> bool {
        self.throttle
            || self.brake
            || self.steer_left
            || self.steer_right
            || self.shift_up
            || self.shift_down
            || self.boost
    }

    /// Release every control.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Full keyboard state: held drive controls plus edge-triggered commands.
///
/// The camera-switch and vehicle-reset commands fire once per key press and
/// are consumed when the per-tick input snapshot is taken.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    /// Held drive controls.
    pub drive: DriveKeys,
    switch_camera_pending: bool,
    reset_vehicle_pending: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a key press/release event.
    ///
    /// Returns `true` if the key was recognized.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::V => {
                if pressed {
                    self.switch_camera_pending = true;
                }
                true
            }
            KeyCode::R => {
                if pressed {
                    self.reset_vehicle_pending = true;
                }
                true
            }
            _ => self.drive.handle_key(key, pressed),
        }
    }

    /// Consume the pending camera-switch command, if any.
    pub fn take_switch_camera(&mut self) -> bool {
        std::mem::take(&mut self.switch_camera_pending)
    }

    /// Consume the pending vehicle-reset command, if any.
    pub fn take_reset_vehicle(&mut self) -> bool {
        std::mem::take(&mut self.reset_vehicle_pending)
    }

    /// Release all keys and drop pending commands.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
