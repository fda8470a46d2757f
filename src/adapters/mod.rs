//! Adapters - concrete implementations of ports
//!
//! Adapters connect the domain to the outside world by implementing
//! the port traits. Each adapter knows how to work with a specific
//! technology or hardware.
//!
//! # Available Adapters
//!
//! - **veml6075**: Vishay VEML6075 UVA/UVB sensor driver
//! - **i2c**: RegisterBus over an embedded-hal I2C controller
//! - **outputs**: Fan-out of one reading to the display peripherals
//! - **render**: Per-peripheral views of a reading (colours, glyphs, codes)

pub mod i2c;
pub mod outputs;
pub mod render;
pub mod veml6075;

pub use self::i2c::I2cBus;
pub use outputs::Outputs;
pub use render::HapticTrigger;
pub use veml6075::{Displayed, LogLine, Unbound, Veml6075, DEFAULT_ADDRESS};
