//! Telemetry Snapshot
//!
//! A serializable view of the vehicle state for the HUD, logging, or
//! external tooling. Values are coerced to finite numbers so a downstream
//! consumer never sees NaN.

use glam::Vec3;
use serde::Serialize;

use crate::vehicle::{GearTable, VehicleState};

/// One frame of vehicle telemetry.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TelemetrySnapshot {
    /// World position.
    pub position: Vec3,
    /// Heading yaw in radians.
    pub yaw: f32,
    /// Speed magnitude in km/h; the gear label carries direction.
    pub speed_kmh: f32,
    /// Gear label: "R", "N", or "1".."6".
    pub gear_label: &'static str,
}

impl Default for TelemetrySnapshot {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            speed_kmh: 0.0,
            gear_label: "N",
        }
    }
}

impl TelemetrySnapshot {
    /// Capture the current vehicle state; absent vehicle yields defaults.
    pub fn capture(vehicle: Option<&VehicleState>, table: &GearTable) -> Self {
        let vehicle = match vehicle {
            Some(v) => v,
            None => return Self::default(),
        };
        Self {
            position: Vec3::new(
                finite(vehicle.position.x),
                finite(vehicle.position.y),
                finite(vehicle.position.z),
            ),
            yaw: finite(vehicle.yaw),
            speed_kmh: finite(vehicle.speed_kmh().abs()),
            gear_label: vehicle.gear_label(table),
        }
    }
}

#[inline]
fn finite(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}
