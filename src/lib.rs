//! VEML6075 UV Sensor Library
//!
//! Driver for the Vishay VEML6075 UVA/UVB light sensor: device
//! identification, configuration, compensated channel readout and UV index
//! classification, plus fan-out of each reading to small display and
//! haptic peripherals.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - Reading / RawChannels entities                                │
//! │  - Calibration service (VIS/IR compensation, UV index)           │
//! │  - UvLevel classification                                        │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - RegisterBus: word/byte register access                        │
//! │  - UvSensorPort: calibrated UV readings                          │
//! │  - TextPanel, RgbMatrix, MonoMatrix, SegmentDisplay, Haptic      │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters                                     │
//! │  - Veml6075: the sensor driver                                   │
//! │  - I2cBus: embedded-hal I2C                                      │
//! │  - Outputs: display fan-out                                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut uv = Veml6075::new(Config::default());
//! let i2c = match uv.identify(I2cBus::new(i2c), DEFAULT_ADDRESS) {
//!     Ok(()) => None,
//!     Err(unbound) => Some(unbound.into_bus()),
//! };
//! uv.start(StartFlags::new(true, false))?;
//! let mut outputs = Outputs::none().with_segment_display(ht16k33);
//! loop {
//!     if let Some(line) = uv.display(&mut outputs, true)?.log {
//!         uart.write_str(&line)?;
//!     }
//! }
//! ```
//!
//! # Testing
//!
//! Tests run on the host with the std test harness:
//! ```bash
//! cargo test --lib
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]

/// Domain layer - pure UV measurement logic
pub mod domain;

/// Ports - traits defining boundaries
pub mod ports;

/// Adapters - concrete implementations
pub mod adapters;

#[cfg(test)]
mod testing;

// Re-export key domain types
pub use domain::{Calibration, RawChannels, Reading, UvLevel};

// Re-export key port traits
pub use ports::{Config, Error, RegisterBus, StartFlags, UvSensorPort};

// Re-export adapters
pub use adapters::{Displayed, HapticTrigger, I2cBus, LogLine, Outputs, Unbound, Veml6075, DEFAULT_ADDRESS};
