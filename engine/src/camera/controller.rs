//! Drive Camera Controller
//!
//! Three camera modes behind one controller: a smoothed third-person chase
//! camera with look-around and auto-recenter, a fixed overview camera, and a
//! free-fly camera. High-speed shake is layered on top of the non-freecam
//! modes as a rotation offset for the renderer to apply.

use glam::{Quat, Vec3};

use crate::input::DriveKeys;
use crate::vehicle::VehicleState;

use super::freecam::FreecamController;
use super::shake::ShakeState;

/// Which camera is driving the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Chase camera behind the vehicle (default).
    #[default]
    ThirdPerson,
    /// Static overview position looking at the vehicle.
    Fixed,
    /// Free-fly camera detached from the vehicle.
    Freecam,
}

impl CameraMode {
    /// The next mode in the cycle order.
    pub fn next(self) -> Self {
        match self {
            Self::ThirdPerson => Self::Fixed,
            Self::Fixed => Self::Freecam,
            Self::Freecam => Self::ThirdPerson,
        }
    }

    /// Display name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::ThirdPerson => "ThirdPerson",
            Self::Fixed => "Fixed",
            Self::Freecam => "Freecam",
        }
    }
}

/// One tick's camera output: where the camera is, what it looks at, and the
/// shake rotation offsets (pitch, yaw, roll) to layer on top of the view.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraFrame {
    pub position: Vec3,
    pub look_target: Vec3,
    pub shake_rotation: Vec3,
}

/// The drive camera: mode cycling, third-person smoothing, look-around,
/// fixed overview and freecam.
///
/// Tuning fields are public so the config layer can overwrite them.
#[derive(Debug, Clone)]
pub struct DriveCameraController {
    /// Active camera mode.
    pub mode: CameraMode,

    // Third-person tuning
    /// Chase offset height above the vehicle, meters.
    pub offset_height: f32,
    /// Chase offset distance behind the vehicle, meters.
    pub offset_distance: f32,
    /// Smoothing factor for the chase offset, per 60 Hz frame.
    pub offset_smoothing: f32,
    /// Peak sideways lean offset in turns, meters.
    pub side_lean: f32,
    /// Look-around sensitivity, radians per mouse unit.
    pub look_sensitivity: f32,
    /// Look-around limit either side, radians.
    pub max_look_angle: f32,
    /// Smoothing factor for the look angle, per 60 Hz frame.
    pub look_smoothing: f32,
    /// Seconds without look input before the view recenters.
    pub auto_return_delay: f32,
    /// How far ahead of the vehicle the chase camera aims, meters.
    pub look_ahead: f32,
    /// Vertical lift applied to the chase look target, meters.
    pub look_at_lift: f32,

    // Fixed-mode tuning
    /// World position of the fixed overview camera.
    pub fixed_position: Vec3,

    /// Free-fly camera, seeded from the current view on mode entry.
    pub freecam: FreecamController,

    // Smoothed state
    current_offset: Vec3,
    side_offset: f32,
    look_angle: f32,
    target_look_angle: f32,
    time_since_look_input: f32,
    shake: ShakeState,

    // Last computed frame, re-emitted when there is nothing to follow
    position: Vec3,
    look_target: Vec3,
}

impl Default for DriveCameraController {
    fn default() -> Self {
        Self {
            mode: CameraMode::ThirdPerson,
            offset_height: 8.0,       // meters above the vehicle
            offset_distance: 18.0,    // meters behind the vehicle
            offset_smoothing: 0.15,   // chase lag
            side_lean: 2.0,           // meters of lean in turns
            look_sensitivity: 0.002,  // radians per mouse unit
            max_look_angle: std::f32::consts::FRAC_PI_3, // ±60°
            look_smoothing: 0.05,
            auto_return_delay: 2.0,   // seconds
            look_ahead: 5.0,          // meters ahead of the vehicle
            look_at_lift: 4.0,        // meters above the vehicle
            fixed_position: Vec3::new(0.0, 20.0, 50.0),
            freecam: FreecamController::new(),
            current_offset: Vec3::new(0.0, 8.0, 18.0),
            side_offset: 0.0,
            look_angle: 0.0,
            target_look_angle: 0.0,
            time_since_look_input: 0.0,
            shake: ShakeState::new(),
            position: Vec3::ZERO,
            look_target: Vec3::ZERO,
        }
    }
}

impl DriveCameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cycle to the next camera mode.
    ///
    /// Entering freecam seeds it from the current view transform, so the
    /// switch is seamless.
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
        if self.mode == CameraMode::Freecam {
            self.freecam.position = self.position;
            self.freecam.look_at(self.look_target);
        }
        println!("[Camera] Switched to {} mode", self.mode.name());
    }

    /// Feed horizontal look input, nudging the look-around target angle.
    fn apply_look_input(&mut self, dx: f32) {
        self.target_look_angle =
            (self.target_look_angle - dx * self.look_sensitivity)
                .clamp(-self.max_look_angle, self.max_look_angle);
        self.time_since_look_input = 0.0;
    }

    /// Current smoothed look-around angle, radians.
    #[inline]
    pub fn look_angle(&self) -> f32 {
        self.look_angle
    }

    /// Per-tick update. Returns the camera frame for the renderer.
    ///
    /// `vehicle` may be `None` before a vehicle is spawned; the chase and
    /// fixed modes then re-emit the last frame, while freecam keeps flying.
    pub fn update(
        &mut self,
        vehicle: Option<&VehicleState>,
        keys: &DriveKeys,
        look_delta_x: f32,
        look_locked: bool,
        dt: f32,
    ) -> CameraFrame {
        match self.mode {
            CameraMode::ThirdPerson => {
                if let Some(vehicle) = vehicle {
                    self.update_third_person(vehicle, look_delta_x, look_locked, dt);
                }
            }
            CameraMode::Fixed => {
                if let Some(vehicle) = vehicle {
                    self.position = self.fixed_position;
                    self.look_target = vehicle.position;
                }
            }
            CameraMode::Freecam => {
                if look_locked {
                    self.freecam.apply_mouse_delta(look_delta_x);
                }
                self.freecam.update_movement(
                    keys.throttle,
                    keys.brake,
                    keys.steer_left,
                    keys.steer_right,
                    keys.boost,
                    dt,
                );
                self.position = self.freecam.position;
                self.look_target = self.freecam.position + self.freecam.forward() * 10.0;
            }
        }

        // Shake only shakes the driving views
        let shake_rotation = match (self.mode, vehicle) {
            (CameraMode::Freecam, _) | (_, None) => Vec3::ZERO,
            (_, Some(vehicle)) => self.shake.update(vehicle.speed_kmh(), dt),
        };

        CameraFrame {
            position: self.position,
            look_target: self.look_target,
            shake_rotation,
        }
    }

    fn update_third_person(
        &mut self,
        vehicle: &VehicleState,
        look_delta_x: f32,
        look_locked: bool,
        dt: f32,
    ) {
        if look_locked && look_delta_x != 0.0 {
            self.apply_look_input(look_delta_x);
        } else {
            self.time_since_look_input += dt;
        }

        // After a quiet period the target recenters; the smoothed angle
        // still eases back rather than snapping.
        if self.time_since_look_input >= self.auto_return_delay {
            self.target_look_angle = 0.0;
        }
        let t = smoothing_step(self.look_smoothing, dt);
        self.look_angle += (self.target_look_angle - self.look_angle) * t;

        // Lean into turns, settling faster near center
        let lean_target = vehicle.yaw.sin() * self.side_lean;
        let lean_factor = if lean_target.abs() < 0.1 { 0.15 } else { 0.08 };
        self.side_offset +=
            (lean_target - self.side_offset) * smoothing_step(lean_factor, dt);

        let target_offset = Vec3::new(self.side_offset, self.offset_height, self.offset_distance);
        self.current_offset +=
            (target_offset - self.current_offset) * smoothing_step(self.offset_smoothing, dt);

        let forward = vehicle.forward();
        let right = forward.cross(Vec3::Y).normalize();
        let rel = right * self.current_offset.x + Vec3::Y * self.current_offset.y
            - forward * self.current_offset.z;
        // Look-around orbits the chase offset around the vehicle
        let rel = Quat::from_rotation_y(self.look_angle) * rel;

        self.position = vehicle.position + rel;
        self.look_target =
            vehicle.position + forward * self.look_ahead + Vec3::Y * self.look_at_lift;
    }
}

/// Convert a per-60 Hz-frame lerp factor into one for an arbitrary `dt`,
/// so smoothing behaves the same at any frame rate.
#[inline]
fn smoothing_step(factor_per_frame: f32, dt: f32) -> f32 {
    1.0 - (1.0 - factor_per_frame).powf(dt * 60.0)
}
