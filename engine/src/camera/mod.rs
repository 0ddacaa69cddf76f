//! Camera Module
//!
//! The drive camera system: a smoothed third-person chase camera, a fixed
//! overview camera, a free-fly camera, and the high-speed shake layered on
//! top. Output per tick is a [`CameraFrame`] the renderer consumes.

pub mod controller;
pub mod freecam;
pub mod shake;

pub use controller::{CameraFrame, CameraMode, DriveCameraController};
pub use freecam::FreecamController;
pub use shake::{
    SHAKE_MAX_ROTATION, SHAKE_MAX_SPEED_KMH, SHAKE_PHASE_RATE, SHAKE_SPEED_THRESHOLD_KMH,
    ShakeState,
};
