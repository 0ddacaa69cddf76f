//! Input Configuration
//!
//! Defines all key bindings as a data structure, enabling future remapping
//! and centralizing input documentation. This is the only place that knows
//! about winit key codes; it translates them into the engine's generic
//! [`KeyCode`](crate::input::KeyCode) before dispatch.

use winit::keyboard::KeyCode;

use crate::input::{InputState, KeyCode as DriveKey};

/// Drive control key bindings (WASD + gear shifts + boost).
#[derive(Clone, Debug)]
pub struct DriveBindings {
    pub throttle: KeyCode,
    pub brake: KeyCode,
    pub steer_left: KeyCode,
    pub steer_right: KeyCode,
    pub shift_up: KeyCode,
    pub shift_down: KeyCode,
    pub boost_left: KeyCode,
    pub boost_right: KeyCode,
}

/// Camera and session command key bindings.
#[derive(Clone, Debug)]
pub struct CommandBindings {
    pub switch_camera: KeyCode,
    pub reset_vehicle: KeyCode,
}

/// Centralized input configuration containing all key bindings.
///
/// `InputConfig::default()` returns the stock bindings.
#[derive(Clone, Debug)]
pub struct InputConfig {
    pub drive: DriveBindings,
    pub commands: CommandBindings,
    pub exit: KeyCode,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            drive: DriveBindings {
                throttle: KeyCode::KeyW,
                brake: KeyCode::KeyS,
                steer_left: KeyCode::KeyA,
                steer_right: KeyCode::KeyD,
                shift_up: KeyCode::KeyE,
                shift_down: KeyCode::KeyQ,
                boost_left: KeyCode::ShiftLeft,
                boost_right: KeyCode::ShiftRight,
            },
            commands: CommandBindings {
                switch_camera: KeyCode::KeyV,
                reset_vehicle: KeyCode::KeyR,
            },
            exit: KeyCode::Escape,
        }
    }
}

impl InputConfig {
    /// Translate a platform key into the engine key it is bound to.
    ///
    /// Returns `None` for unbound keys.
    pub fn translate(&self, key: KeyCode) -> Option<DriveKey> {
        let d = &self.drive;
        if key == d.throttle {
            Some(DriveKey::W)
        } else if key == d.brake {
            Some(DriveKey::S)
        } else if key == d.steer_left {
            Some(DriveKey::A)
        } else if key == d.steer_right {
            Some(DriveKey::D)
        } else if key == d.shift_up {
            Some(DriveKey::E)
        } else if key == d.shift_down {
            Some(DriveKey::Q)
        } else if key == d.boost_left {
            Some(DriveKey::ShiftLeft)
        } else if key == d.boost_right {
            Some(DriveKey::ShiftRight)
        } else if key == self.commands.switch_camera {
            Some(DriveKey::V)
        } else if key == self.commands.reset_vehicle {
            Some(DriveKey::R)
        } else if key == self.exit {
            Some(DriveKey::Escape)
        } else {
            None
        }
    }

    /// Translate and feed a platform key event into the input state.
    ///
    /// Returns `true` if the key was bound and handled.
    pub fn dispatch(&self, input: &mut InputState, key: KeyCode, pressed: bool) -> bool {
        match self.translate(key) {
            Some(drive_key) => input.keyboard.handle_key(drive_key, pressed),
            None => false,
        }
    }
}
