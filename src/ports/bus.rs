//! Bus port - abstraction over the two-wire register transport
//!
//! The driver only ever needs two SMBus-style primitives: read a 16-bit
//! word from a register and write one byte to a register. Any
//! `embedded_hal::i2c::I2c` plugs in through
//! [`crate::adapters::I2cBus`].

/// Port for register-level access to a device on a shared bus
///
/// Calls are synchronous and block until the transport completes. Timeouts
/// and retries, if any, belong to the implementation.
///
/// # Example Implementation
///
/// ```ignore
/// struct LinuxSmbus {
///     dev: i2cdev::linux::LinuxI2CDevice,
/// }
///
/// impl RegisterBus for LinuxSmbus {
///     type Error = i2cdev::linux::LinuxI2CError;
///
///     fn read_word(&mut self, _address: u8, register: u8) -> Result<u16, Self::Error> {
///         self.dev.smbus_read_word_data(register)
///     }
///
///     fn write_byte(&mut self, _address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
///         self.dev.smbus_write_byte_data(register, value)
///     }
/// }
/// ```
pub trait RegisterBus {
    /// Transport error, surfaced to the caller untouched
    type Error: core::fmt::Debug;

    /// Read a little-endian 16-bit word from `register` of the device at `address`
    fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error>;

    /// Write one byte to `register` of the device at `address`
    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    type Error = T::Error;

    fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error> {
        T::read_word(self, address, register)
    }

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        T::write_byte(self, address, register, value)
    }
}
