//! Domain layer - pure UV measurement logic independent of hardware
//!
//! This module contains the entities and services that turn raw photodiode
//! counts into a calibrated UV index and a severity level.

pub mod calibration;
pub mod level;
pub mod reading;

pub use calibration::Calibration;
pub use level::UvLevel;
pub use reading::{RawChannels, Reading};
