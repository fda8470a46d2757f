//! Ports (interfaces) defining the boundaries of the driver
//!
//! Ports are traits that define how the UV domain talks to the outside
//! world. They keep the calibration logic independent of any particular
//! bus or display implementation.
//!
//! # Hexagonal Architecture
//!
//! - **RegisterBus**: How registers are read and written (I2C, SMBus, mock)
//! - **UvSensorPort**: How calibrated UV readings are obtained
//! - **Output ports**: Where readings are rendered (OLED panel, LED
//!   matrices, segment display, haptic actuator)

pub mod bus;
pub mod output;
pub mod sensor;

pub use bus::RegisterBus;
pub use output::{
    Haptic, MonoMatrix, NoOutput, OutputKind, RgbMatrix, SegmentDisplay, TextPanel, MONO_CELLS,
    RGB_CELLS,
};
pub use sensor::{Config, DynamicRange, Error, IntegrationTime, StartFlags, UvSensorPort};
