//! Two independent sensors sharing one I2C bus

use core::cell::RefCell;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use embedded_hal_bus::i2c::RefCellDevice;
use veml6075_uv::{Config, I2cBus, StartFlags, Unbound, UvLevel, Veml6075, DEFAULT_ADDRESS};

const SECOND_ADDRESS: u8 = 0x11;

/// Bus with one register file per device address
struct TwoSensorBus {
    devices: [(u8, [u16; 16]); 2],
}

impl TwoSensorBus {
    fn new() -> Self {
        let mut bus = Self {
            devices: [(DEFAULT_ADDRESS, [0; 16]), (SECOND_ADDRESS, [0; 16])],
        };
        for (_, registers) in bus.devices.iter_mut() {
            registers[0x0c] = 0x0026;
        }
        bus
    }

    fn set_channels(&mut self, address: u8, uva: u16, uvb: u16, comp1: u16, comp2: u16) {
        let registers = self.registers(address).unwrap();
        registers[0x07] = uva;
        registers[0x09] = uvb;
        registers[0x0a] = comp1;
        registers[0x0b] = comp2;
    }

    fn registers(&mut self, address: u8) -> Option<&mut [u16; 16]> {
        self.devices
            .iter_mut()
            .find(|(a, _)| *a == address)
            .map(|(_, registers)| registers)
    }
}

impl ErrorType for TwoSensorBus {
    type Error = ErrorKind;
}

impl I2c for TwoSensorBus {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        let registers = self
            .registers(address)
            .ok_or(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))?;

        let mut pointer = 0usize;
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    pointer = bytes[0] as usize;
                    if let Some(&value) = bytes.get(1) {
                        registers[pointer] = (registers[pointer] & 0xff00) | u16::from(value);
                    }
                }
                Operation::Read(buf) => {
                    buf.copy_from_slice(&registers[pointer].to_le_bytes()[..buf.len()]);
                }
            }
        }
        Ok(())
    }
}

#[test]
fn test_two_sensors_on_one_bus_keep_separate_state() {
    let mut raw_bus = TwoSensorBus::new();
    raw_bus.set_channels(DEFAULT_ADDRESS, 2000, 1000, 50, 20);
    raw_bus.set_channels(SECOND_ADDRESS, 9000, 5000, 20, 10);
    let bus = RefCell::new(raw_bus);

    let mut shade = Veml6075::new(Config::default());
    let mut sun = Veml6075::new(Config::default());

    assert!(shade.identify(I2cBus::new(RefCellDevice::new(&bus)), DEFAULT_ADDRESS).is_ok());
    assert!(sun.identify(I2cBus::new(RefCellDevice::new(&bus)), SECOND_ADDRESS).is_ok());

    shade.start(StartFlags::new(true, false)).unwrap();
    sun.start(StartFlags::default()).unwrap();

    let shade_reading = shade.get().unwrap();
    let sun_reading = sun.get().unwrap();

    assert_eq!(shade_reading.uv_level, UvLevel::Low);
    assert_eq!(sun_reading.uv_level, UvLevel::Extreme);
    assert!(shade.log().is_some());
    assert!(sun.log().is_none());
    assert_eq!(shade.address(), Some(DEFAULT_ADDRESS));
    assert_eq!(sun.address(), Some(SECOND_ADDRESS));
}

#[test]
fn test_identify_retries_next_address_after_mismatch() {
    let mut raw_bus = TwoSensorBus::new();
    // Something else lives at the default address
    raw_bus.registers(DEFAULT_ADDRESS).unwrap()[0x0c] = 0x0041;
    let bus = RefCell::new(raw_bus);

    let mut sensor = Veml6075::new(Config::default());
    let rejected = sensor.identify(I2cBus::new(RefCellDevice::new(&bus)), DEFAULT_ADDRESS);
    assert!(matches!(rejected, Err(Unbound::Mismatch(_, 0x0041))));
    assert!(!sensor.is_available());
    assert!(sensor.identify(I2cBus::new(RefCellDevice::new(&bus)), SECOND_ADDRESS).is_ok());
    assert_eq!(sensor.address(), Some(SECOND_ADDRESS));
}
