//! Config Module
//!
//! Centralized configuration: gameplay tuning (JSON-backed) and the key
//! bindings that translate platform input into engine key codes.

pub mod input_config;
pub mod tuning;

pub use input_config::InputConfig;
pub use tuning::{CameraTuning, ConfigError, TuningConfig, VehicleTuning};
