//! Drive Session
//!
//! Owns the full per-tick simulation: the gear table, the speed model, the
//! engine-braking controller, the camera and the (optional) vehicle. The host
//! feeds a [`TickInput`] snapshot plus elapsed time once per frame; the
//! session runs the fixed update order and hands back the camera frame.
//!
//! Update order per tick: camera-mode command, vehicle reset command, state
//! sanitize, gear shift, speed model, position integration, camera.

use glam::Vec3;

use crate::camera::{CameraFrame, DriveCameraController};
use crate::input::TickInput;
use crate::vehicle::{
    EngineBrakingController, GearTable, MOVEMENT_SCALE, SpeedController, VehicleState,
    update_gear_shift,
};

use crate::game::config::TuningConfig;
use crate::game::telemetry::TelemetrySnapshot;

/// One driving session: world state plus the controllers that update it.
pub struct DriveSession {
    pub gear_table: GearTable,
    pub speed: SpeedController,
    pub engine_braking: EngineBrakingController,
    pub camera: DriveCameraController,
    /// Visual distance covered per meter of model speed.
    pub movement_scale: f32,
    vehicle: Option<VehicleState>,
    last_frame: CameraFrame,
    /// Simulated seconds since the session started.
    elapsed: f32,
}

impl Default for DriveSession {
    fn default() -> Self {
        Self {
            gear_table: GearTable::new(),
            speed: SpeedController::new(),
            engine_braking: EngineBrakingController::new(),
            camera: DriveCameraController::new(),
            movement_scale: MOVEMENT_SCALE,
            vehicle: None,
            last_frame: CameraFrame::default(),
            elapsed: 0.0,
        }
    }
}

impl DriveSession {
    /// Create a session with stock tuning and no vehicle spawned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with the given tuning applied.
    pub fn from_config(config: &TuningConfig) -> Self {
        let mut session = Self::new();
        config.apply(&mut session);
        session
    }

    /// Spawn the vehicle at a world position and heading. Replaces any
    /// existing vehicle and cancels in-flight engine braking.
    pub fn spawn_vehicle(&mut self, position: Vec3, yaw: f32) {
        let mut vehicle = VehicleState::new();
        vehicle.position = position;
        vehicle.yaw = yaw;
        self.vehicle = Some(vehicle);
        self.engine_braking.cancel();
        println!("[Session] Vehicle spawned at {position}");
    }

    #[inline]
    pub fn vehicle(&self) -> Option<&VehicleState> {
        self.vehicle.as_ref()
    }

    #[inline]
    pub fn vehicle_mut(&mut self) -> Option<&mut VehicleState> {
        self.vehicle.as_mut()
    }

    /// Simulated seconds since the session started.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The camera frame computed by the most recent tick.
    #[inline]
    pub fn camera_frame(&self) -> CameraFrame {
        self.last_frame
    }

    /// Run one simulation tick.
    ///
    /// The camera always updates, so freecam keeps flying before a vehicle
    /// is spawned, and the vehicle keeps simulating while freecam is active.
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> CameraFrame {
        self.elapsed += dt;

        if input.switch_camera {
            self.camera.cycle_mode();
        }

        if let Some(vehicle) = self.vehicle.as_mut() {
            if input.reset_vehicle {
                vehicle.reset();
                self.engine_braking.cancel();
                println!("[Session] Vehicle reset");
            }

            vehicle.sanitize(&self.gear_table);

            let outcome = update_gear_shift(
                vehicle,
                &mut self.engine_braking,
                &self.gear_table,
                input.drive.shift_up,
                input.drive.shift_down,
                dt,
            );
            if outcome.shifted {
                println!("[Session] Shifted to gear {}", vehicle.gear_label(&self.gear_table));
            }

            self.speed.update(
                vehicle,
                &mut self.engine_braking,
                &self.gear_table,
                &input.drive,
                dt,
            );
            vehicle.advance(dt, self.movement_scale);
        }

        self.last_frame = self.camera.update(
            self.vehicle.as_ref(),
            &input.drive,
            input.look_delta_x,
            input.look_locked,
            dt,
        );
        self.last_frame
    }

    /// Snapshot the vehicle state for the HUD or logging.
    pub fn telemetry(&self) -> TelemetrySnapshot {
        TelemetrySnapshot::capture(self.vehicle.as_ref(), &self.gear_table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraMode;
    use crate::input::DriveKeys;
    use crate::vehicle::FIRST_FORWARD_INDEX;

    const DT: f32 = 1.0 / 60.0;

    fn throttle_tick() -> TickInput {
        TickInput {
            drive: DriveKeys { throttle: true, ..DriveKeys::default() },
            ..TickInput::default()
        }
    }

    #[test]
    fn test_tick_without_vehicle_is_safe() {
        let mut session = DriveSession::new();
        let frame = session.tick(&throttle_tick(), DT);
        assert_eq!(frame.shake_rotation, Vec3::ZERO);
        let snapshot = session.telemetry();
        assert_eq!(snapshot.gear_label, "N");
        assert_eq!(snapshot.speed_kmh, 0.0);
    }

    #[test]
    fn test_full_drive_away() {
        let mut session = DriveSession::new();
        session.spawn_vehicle(Vec3::ZERO, 0.0);

        // Shift N -> 1, then hold throttle for 2 s
        let shift = TickInput {
            drive: DriveKeys { shift_up: true, ..DriveKeys::default() },
            ..TickInput::default()
        };
        session.tick(&shift, DT);
        assert_eq!(session.vehicle().map(|v| v.gear_index), Some(FIRST_FORWARD_INDEX));

        for _ in 0..120 {
            session.tick(&throttle_tick(), DT);
        }
        let vehicle = session.vehicle().cloned();
        let vehicle = match vehicle {
            Some(v) => v,
            None => panic!("vehicle disappeared"),
        };
        assert!(vehicle.speed > 5.0);
        // Yaw 0 faces -Z, so driving forward moves -Z, scaled by movement_scale
        assert!(vehicle.position.z < -30.0);
        assert_eq!(vehicle.position.x, 0.0);
    }

    #[test]
    fn test_upshifting_run_reaches_100_kmh_monotonically() {
        let mut session = DriveSession::new();
        session.spawn_vehicle(Vec3::ZERO, 0.0);

        // Hold throttle; tap the shifter whenever the band ceiling nears
        // (from N the first tap drops straight into gear 1).
        let mut last_kmh = 0.0;
        for _ in 0..1800 {
            let near_ceiling = match session.vehicle() {
                Some(v) => session
                    .gear_table
                    .band_ceiling_kmh(v.gear_index)
                    .map(|max| v.speed_kmh() >= max - 10.0)
                    .unwrap_or(true),
                None => panic!("vehicle disappeared"),
            };
            let input = TickInput {
                drive: DriveKeys {
                    throttle: true,
                    shift_up: near_ceiling,
                    ..DriveKeys::default()
                },
                ..TickInput::default()
            };
            session.tick(&input, DT);

            let kmh = session.telemetry().speed_kmh;
            assert!(kmh >= last_kmh - 1e-3, "speed regressed: {kmh} < {last_kmh}");
            last_kmh = kmh;
            if kmh >= 100.0 {
                break;
            }
        }
        assert!(last_kmh >= 100.0, "only reached {last_kmh} km/h");
    }

    #[test]
    fn test_downshift_chain_retargets_engine_braking() {
        let mut session = DriveSession::new();
        session.spawn_vehicle(Vec3::ZERO, 0.0);
        match session.vehicle_mut() {
            Some(v) => {
                v.gear_index = 7; // gear 6
                v.speed = 69.44; // 250 km/h
            }
            None => panic!("vehicle disappeared"),
        }

        // Hold shift-down; the cooldown spaces the shifts 0.5 s apart,
        // walking 6 -> 5 -> 4 -> 3 over ~1.1 s
        let down = TickInput {
            drive: DriveKeys { shift_down: true, ..DriveKeys::default() },
            ..TickInput::default()
        };
        for _ in 0..70 {
            session.tick(&down, DT);
        }

        let gear = session.vehicle().map(|v| v.gear_label(&session.gear_table));
        assert_eq!(gear, Some("3"));
        assert!(session.engine_braking.is_active());
        // Final session targets gear 3's 130 km/h band ceiling
        assert!((session.engine_braking.target_speed() - 130.0 / 3.6).abs() < 1e-3);
    }

    #[test]
    fn test_reset_returns_vehicle_to_origin() {
        let mut session = DriveSession::new();
        session.spawn_vehicle(Vec3::new(10.0, 0.0, 10.0), 1.0);
        session.tick(&throttle_tick(), DT);

        let reset = TickInput { reset_vehicle: true, ..TickInput::default() };
        session.tick(&reset, DT);
        let vehicle = session.vehicle().cloned();
        assert!(matches!(vehicle, Some(v) if v.position == Vec3::ZERO && v.speed == 0.0));
        assert!(!session.engine_braking.is_active());
    }

    #[test]
    fn test_vehicle_keeps_simulating_in_freecam() {
        let mut session = DriveSession::new();
        session.spawn_vehicle(Vec3::ZERO, 0.0);
        let shift = TickInput {
            drive: DriveKeys { shift_up: true, ..DriveKeys::default() },
            ..TickInput::default()
        };
        session.tick(&shift, DT);

        // Two camera switches land in freecam
        let switch = TickInput { switch_camera: true, ..TickInput::default() };
        session.tick(&switch, DT);
        session.tick(&switch, DT);
        assert_eq!(session.camera.mode, CameraMode::Freecam);

        // Freecam shares the movement keys, so a throttle tick also flies
        // the camera; the vehicle must still accelerate underneath.
        for _ in 0..60 {
            session.tick(&throttle_tick(), DT);
        }
        assert!(matches!(session.vehicle(), Some(v) if v.speed > 3.0));
    }

    #[test]
    fn test_elapsed_accumulates_simulated_time() {
        let mut session = DriveSession::new();
        for _ in 0..90 {
            session.tick(&TickInput::default(), DT);
        }
        assert!((session.elapsed() - 1.5).abs() < 1e-3);
    }
}
