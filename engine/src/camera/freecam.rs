//! Freecam Controller
//!
//! A free-fly camera fully decoupled from the vehicle: mouse deltas rotate it
//! directly and held movement keys translate it along its own forward/right
//! vectors, with a boost modifier. No smoothing is applied.

use glam::Vec3;

/// Pitch limit constant: -89 degrees in radians
const PITCH_LIMIT_MIN: f32 = -89.0 * std::f32::consts::PI / 180.0;
/// Pitch limit constant: +89 degrees in radians
const PITCH_LIMIT_MAX: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Free-fly camera state and movement.
///
/// Coordinate system matches the rest of the engine: +Y up, yaw 0 looks
/// toward -Z, increasing yaw turns right. Pitch is clamped to ±89° to
/// prevent gimbal lock.
#[derive(Clone, Debug)]
pub struct FreecamController {
    /// Camera position in world space.
    pub position: Vec3,
    /// Horizontal angle (radians) - unrestricted, wraps around.
    pub yaw: f32,
    /// Vertical angle (radians) - clamped to ±89°.
    pub pitch: f32,
    /// Movement speed in m/s.
    pub move_speed: f32,
    /// Movement speed while the boost modifier is held, in m/s.
    pub boost_speed: f32,
    /// Mouse sensitivity in radians per device unit.
    pub sensitivity: f32,
}

impl Default for FreecamController {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            move_speed: 30.0,
            boost_speed: 60.0,
            sensitivity: 0.002,
        }
    }
}

impl FreecamController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply horizontal mouse delta, rotating the camera instantly.
    pub fn apply_mouse_delta(&mut self, dx: f32) {
        self.yaw += dx * self.sensitivity;
    }

    /// The camera's forward direction vector, derived from yaw and pitch.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// The camera's right direction vector, in the horizontal plane.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Point the camera at a world position, setting yaw and pitch.
    pub fn look_at(&mut self, target: Vec3) {
        let to_target = target - self.position;
        let distance = to_target.length();
        if distance > 0.001 {
            self.yaw = to_target.x.atan2(-to_target.z);
            self.pitch = (to_target.y / distance)
                .asin()
                .clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX);
        }
    }

    /// Integrate position from held movement keys (frame-rate independent).
    ///
    /// Forward/backward move along the full 3D view direction (so looking
    /// down and flying forward descends); left/right strafe horizontally.
    pub fn update_movement(
        &mut self,
        forward: bool,
        backward: bool,
        left: bool,
        right: bool,
        boost: bool,
        dt: f32,
    ) {
        let speed = if boost { self.boost_speed } else { self.move_speed };
        let dir = self.forward();
        let right_dir = self.right();

        if forward {
            self.position += dir * speed * dt;
        }
        if backward {
            self.position -= dir * speed * dt;
        }
        if left {
            self.position -= right_dir * speed * dt;
        }
        if right {
            self.position += right_dir * speed * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_defaults() {
        let cam = FreecamController::new();
        assert_eq!(cam.position, Vec3::ZERO);
        assert_eq!(cam.move_speed, 30.0);
        assert_eq!(cam.boost_speed, 60.0);
        assert!((cam.sensitivity - 0.002).abs() < 1e-6);
    }

    #[test]
    fn test_forward_at_rest_is_neg_z() {
        let cam = FreecamController::new();
        let f = cam.forward();
        assert!(f.x.abs() < 1e-6);
        assert!((f.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mouse_delta_rotates_yaw() {
        let mut cam = FreecamController::new();
        cam.apply_mouse_delta(100.0);
        assert!((cam.yaw - 0.2).abs() < 1e-4);
    }

    #[test]
    fn test_movement_along_view_direction() {
        let mut cam = FreecamController::new();
        cam.update_movement(true, false, false, false, false, DT);
        assert!((cam.position.z + 30.0 * DT).abs() < 1e-4);
        assert_eq!(cam.position.x, 0.0);
    }

    #[test]
    fn test_boost_doubles_speed() {
        let mut slow = FreecamController::new();
        let mut fast = FreecamController::new();
        slow.update_movement(true, false, false, false, false, DT);
        fast.update_movement(true, false, false, false, true, DT);
        assert!((fast.position.z - slow.position.z * 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_strafe_is_horizontal() {
        let mut cam = FreecamController::new();
        cam.pitch = 0.5;
        cam.update_movement(false, false, false, true, false, DT);
        assert_eq!(cam.position.y, 0.0);
        assert!(cam.position.x > 0.0);
    }

    #[test]
    fn test_look_at_clamps_pitch() {
        let mut cam = FreecamController::new();
        cam.look_at(Vec3::new(0.0, 100.0, -0.01));
        assert!(cam.pitch <= PITCH_LIMIT_MAX + 1e-6);
    }
}
