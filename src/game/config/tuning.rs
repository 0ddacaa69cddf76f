//! Gameplay Tuning
//!
//! JSON-backed tuning for the vehicle dynamics and the camera, so handling
//! and feel can be iterated without recompiling. `Default` returns the stock
//! values; missing fields in a tuning file fall back to them.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::vehicle::MOVEMENT_SCALE;

use crate::game::session::DriveSession;

/// Vehicle handling parameters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VehicleTuning {
    /// Peak forward acceleration, m/s².
    pub base_acceleration: f32,
    /// Base braking deceleration, m/s².
    pub brake_deceleration: f32,
    /// Reverse acceleration, m/s².
    pub reverse_acceleration: f32,
    /// Turn rate at low speed, rad/s.
    pub max_turn_rate: f32,
    /// Turn rate at and above the falloff speed, rad/s.
    pub min_turn_rate: f32,
    /// Speed (km/h) at which the turn rate bottoms out.
    pub turn_falloff_kmh: f32,
    /// Visual distance covered per meter of model speed.
    pub movement_scale: f32,
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self {
            base_acceleration: 10.0,
            brake_deceleration: 5.0,
            reverse_acceleration: 5.0,
            max_turn_rate: 1.8,
            min_turn_rate: 0.3,
            turn_falloff_kmh: 100.0,
            movement_scale: MOVEMENT_SCALE,
        }
    }
}

/// Camera feel parameters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraTuning {
    /// Chase offset height above the vehicle, meters.
    pub offset_height: f32,
    /// Chase offset distance behind the vehicle, meters.
    pub offset_distance: f32,
    /// Chase offset smoothing factor, per 60 Hz frame.
    pub offset_smoothing: f32,
    /// Peak sideways lean in turns, meters.
    pub side_lean: f32,
    /// Look-around sensitivity, radians per mouse unit.
    pub look_sensitivity: f32,
    /// Look-around limit either side, radians.
    pub max_look_angle: f32,
    /// Look angle smoothing factor, per 60 Hz frame.
    pub look_smoothing: f32,
    /// Seconds without look input before the view recenters.
    pub auto_return_delay: f32,
    /// How far ahead of the vehicle the chase camera aims, meters.
    pub look_ahead: f32,
    /// Vertical lift of the chase look target, meters.
    pub look_at_lift: f32,
    /// World position of the fixed overview camera.
    pub fixed_position: Vec3,
    /// Freecam speed, m/s.
    pub freecam_move_speed: f32,
    /// Freecam speed with boost held, m/s.
    pub freecam_boost_speed: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            offset_height: 8.0,
            offset_distance: 18.0,
            offset_smoothing: 0.15,
            side_lean: 2.0,
            look_sensitivity: 0.002,
            max_look_angle: std::f32::consts::FRAC_PI_3,
            look_smoothing: 0.05,
            auto_return_delay: 2.0,
            look_ahead: 5.0,
            look_at_lift: 4.0,
            fixed_position: Vec3::new(0.0, 20.0, 50.0),
            freecam_move_speed: 30.0,
            freecam_boost_speed: 60.0,
        }
    }
}

/// Top-level tuning file contents.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TuningConfig {
    pub vehicle: VehicleTuning,
    pub camera: CameraTuning,
}

impl TuningConfig {
    /// Load tuning from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        println!("[Config] Loaded tuning from {}", path.display());
        Ok(config)
    }

    /// Write tuning to a JSON file, pretty-printed.
    pub fn save_json(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Push these values into a session's controllers.
    pub fn apply(&self, session: &mut DriveSession) {
        let v = &self.vehicle;
        session.speed.base_acceleration = v.base_acceleration;
        session.speed.brake_deceleration = v.brake_deceleration;
        session.speed.reverse_acceleration = v.reverse_acceleration;
        session.speed.max_turn_rate = v.max_turn_rate;
        session.speed.min_turn_rate = v.min_turn_rate;
        session.speed.turn_falloff_kmh = v.turn_falloff_kmh;
        session.movement_scale = v.movement_scale;

        let c = &self.camera;
        let camera = &mut session.camera;
        camera.offset_height = c.offset_height;
        camera.offset_distance = c.offset_distance;
        camera.offset_smoothing = c.offset_smoothing;
        camera.side_lean = c.side_lean;
        camera.look_sensitivity = c.look_sensitivity;
        camera.max_look_angle = c.max_look_angle;
        camera.look_smoothing = c.look_smoothing;
        camera.auto_return_delay = c.auto_return_delay;
        camera.look_ahead = c.look_ahead;
        camera.look_at_lift = c.look_at_lift;
        camera.fixed_position = c.fixed_position;
        camera.freecam.move_speed = c.freecam_move_speed;
        camera.freecam.boost_speed = c.freecam_boost_speed;
    }
}

/// Errors that can occur loading or saving a tuning file.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_session() {
        let stock = DriveSession::new();
        let mut configured = DriveSession::new();
        TuningConfig::default().apply(&mut configured);
        assert_eq!(stock.speed.base_acceleration, configured.speed.base_acceleration);
        assert_eq!(stock.movement_scale, configured.movement_scale);
        assert_eq!(stock.camera.offset_distance, configured.camera.offset_distance);
        assert_eq!(stock.camera.fixed_position, configured.camera.fixed_position);
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = TuningConfig::default();
        config.vehicle.base_acceleration = 14.0;
        config.camera.side_lean = 3.5;
        let text = match serde_json::to_string(&config) {
            Ok(t) => t,
            Err(e) => panic!("serialize failed: {e}"),
        };
        let back: TuningConfig = match serde_json::from_str(&text) {
            Ok(c) => c,
            Err(e) => panic!("deserialize failed: {e}"),
        };
        assert_eq!(config, back);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let text = r#"{ "vehicle": { "base_acceleration": 12.0 } }"#;
        let config: TuningConfig = match serde_json::from_str(text) {
            Ok(c) => c,
            Err(e) => panic!("deserialize failed: {e}"),
        };
        assert_eq!(config.vehicle.base_acceleration, 12.0);
        assert_eq!(config.vehicle.brake_deceleration, 5.0);
        assert_eq!(config.camera, CameraTuning::default());
    }

    #[test]
    fn test_apply_reaches_every_controller() {
        let mut config = TuningConfig::default();
        config.vehicle.max_turn_rate = 2.5;
        config.camera.freecam_boost_speed = 90.0;
        config.camera.fixed_position = Vec3::new(5.0, 25.0, 40.0);

        let mut session = DriveSession::new();
        config.apply(&mut session);
        assert_eq!(session.speed.max_turn_rate, 2.5);
        assert_eq!(session.camera.freecam.boost_speed, 90.0);
        assert_eq!(session.camera.fixed_position, Vec3::new(5.0, 25.0, 40.0));
    }
}
