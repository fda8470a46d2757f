//! embedded-hal I2C adapter
//!
//! This adapter implements the RegisterBus port on top of any blocking
//! `embedded_hal::i2c::I2c` bus, using SMBus word/byte transfers.

use embedded_hal::i2c::I2c;

use crate::ports::bus::RegisterBus;

/// RegisterBus over an embedded-hal 1.0 I2C controller
///
/// Works with an owned bus, `&mut` borrows, or the shared-bus devices from
/// `embedded-hal-bus` when several peripherals sit on one bus.
pub struct I2cBus<I> {
    i2c: I,
}

impl<I: I2c> I2cBus<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Mutable access to the underlying I2C bus
    pub fn inner_mut(&mut self) -> &mut I {
        &mut self.i2c
    }

    /// Release the underlying I2C bus
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> RegisterBus for I2cBus<I> {
    type Error = I::Error;

    fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error> {
        // SMBus read word: command byte, repeated start, LSB first
        let mut buf = [0u8; 2];
        self.i2c.write_read(address, &[register], &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(address, &[register, value])
    }
}
