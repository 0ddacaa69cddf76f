//! Game Module
//!
//! The drive session layer on top of the engine: ties input, vehicle
//! dynamics and the camera together into a per-tick update, and exposes
//! telemetry and tuning configuration.

pub mod config;
pub mod session;
pub mod telemetry;

pub use config::{ConfigError, TuningConfig};
pub use session::DriveSession;
pub use telemetry::TelemetrySnapshot;
