//! Test doubles for the bus and the output peripherals
//!
//! Host-only; compiled for `cargo test`.

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use crate::ports::output::{Haptic, MonoMatrix, RgbMatrix, SegmentDisplay, TextPanel, MONO_CELLS, RGB_CELLS};

/// A bus transfer seen by [`FakeI2c`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusEvent {
    /// Word read from a register
    Read(u8),
    /// Byte written to a register
    Write(u8, u8),
}

/// In-memory I2C device with 16-bit registers
pub struct FakeI2c {
    address: u8,
    registers: [u16; 16],
    events: Vec<BusEvent>,
    fail_register: Option<u8>,
}

impl FakeI2c {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            registers: [0; 16],
            events: Vec::new(),
            fail_register: None,
        }
    }

    /// A VEML6075 answering with its device id
    pub fn veml6075(address: u8) -> Self {
        let mut fake = Self::new(address);
        fake.set_register(0x0c, 0x0026);
        fake
    }

    pub fn set_register(&mut self, register: u8, value: u16) {
        self.registers[register as usize] = value;
    }

    pub fn register(&self, register: u8) -> u16 {
        self.registers[register as usize]
    }

    /// Load the four measurement registers
    pub fn set_channels(&mut self, uva: u16, uvb: u16, comp1: u16, comp2: u16) {
        self.set_register(0x07, uva);
        self.set_register(0x09, uvb);
        self.set_register(0x0a, comp1);
        self.set_register(0x0b, comp2);
    }

    /// Any transfer touching `register` fails with a bus error
    pub fn fail_on(&mut self, register: u8) {
        self.fail_register = Some(register);
    }

    pub fn events(&self) -> &[BusEvent] {
        &self.events
    }
}

impl ErrorType for FakeI2c {
    type Error = ErrorKind;
}

impl I2c for FakeI2c {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        let mut pointer = 0u8;
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    pointer = bytes[0];
                    if self.fail_register == Some(pointer) {
                        return Err(ErrorKind::Bus);
                    }
                    if let Some(&value) = bytes.get(1) {
                        let reg = &mut self.registers[pointer as usize];
                        *reg = (*reg & 0xff00) | u16::from(value);
                        self.events.push(BusEvent::Write(pointer, value));
                    }
                }
                Operation::Read(buf) => {
                    let bytes = self.registers[pointer as usize].to_le_bytes();
                    buf.copy_from_slice(&bytes[..buf.len()]);
                    self.events.push(BusEvent::Read(pointer));
                }
            }
        }
        Ok(())
    }
}

/// Fault returned by the failing output doubles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FakeFault;

/// Call recorded by [`FakePanel`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelCall {
    Power(bool),
    Clear,
    Small(String, u8, u8, bool),
    Medium(String, u8, u8, bool),
    Separator(u8),
}

pub struct FakePanel {
    available: bool,
    calls: Vec<PanelCall>,
}

impl FakePanel {
    pub fn new() -> Self {
        Self {
            available: true,
            calls: Vec::new(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[PanelCall] {
        &self.calls
    }
}

impl TextPanel for FakePanel {
    type Error = FakeFault;

    fn is_available(&self) -> bool {
        self.available
    }

    fn set_power(&mut self, on: bool) -> Result<(), Self::Error> {
        self.calls.push(PanelCall::Power(on));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.calls.push(PanelCall::Clear);
        Ok(())
    }

    fn draw_text_small(&mut self, text: &str, x: u8, row: u8, clear_rest: bool) -> Result<(), Self::Error> {
        self.calls.push(PanelCall::Small(text.to_string(), x, row, clear_rest));
        Ok(())
    }

    fn draw_text_medium(&mut self, text: &str, x: u8, row: u8, clear_rest: bool) -> Result<(), Self::Error> {
        self.calls.push(PanelCall::Medium(text.to_string(), x, row, clear_rest));
        Ok(())
    }

    fn draw_separator(&mut self, row: u8) -> Result<(), Self::Error> {
        self.calls.push(PanelCall::Separator(row));
        Ok(())
    }
}

/// Records frames for either LED matrix
pub struct FakeMatrix {
    rgb: Vec<[u32; RGB_CELLS]>,
    mono: Vec<[u8; MONO_CELLS]>,
}

impl FakeMatrix {
    pub fn new() -> Self {
        Self {
            rgb: Vec::new(),
            mono: Vec::new(),
        }
    }

    pub fn rgb_frames(&self) -> &[[u32; RGB_CELLS]] {
        &self.rgb
    }

    pub fn mono_frames(&self) -> &[[u8; MONO_CELLS]] {
        &self.mono
    }
}

impl RgbMatrix for FakeMatrix {
    type Error = FakeFault;

    fn is_available(&self) -> bool {
        true
    }

    fn show(&mut self, pixels: &[u32; RGB_CELLS]) -> Result<(), Self::Error> {
        self.rgb.push(*pixels);
        Ok(())
    }
}

impl MonoMatrix for FakeMatrix {
    type Error = FakeFault;

    fn is_available(&self) -> bool {
        true
    }

    fn show(&mut self, pixels: &[u8; MONO_CELLS]) -> Result<(), Self::Error> {
        self.mono.push(*pixels);
        Ok(())
    }
}

pub struct FakeSegments {
    fail: bool,
    shown: Vec<String>,
}

impl FakeSegments {
    pub fn new() -> Self {
        Self {
            fail: false,
            shown: Vec::new(),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            shown: Vec::new(),
        }
    }

    pub fn shown(&self) -> &[String] {
        &self.shown
    }
}

impl SegmentDisplay for FakeSegments {
    type Error = FakeFault;

    fn is_available(&self) -> bool {
        true
    }

    fn show(&mut self, text: &str) -> Result<(), Self::Error> {
        if self.fail {
            return Err(FakeFault);
        }
        self.shown.push(text.to_string());
        Ok(())
    }
}

pub struct FakeHaptic {
    played: Vec<u8>,
}

impl FakeHaptic {
    pub fn new() -> Self {
        Self { played: Vec::new() }
    }

    pub fn played(&self) -> &[u8] {
        &self.played
    }
}

impl Haptic for FakeHaptic {
    type Error = FakeFault;

    fn is_available(&self) -> bool {
        true
    }

    fn play(&mut self, effect: u8) -> Result<(), Self::Error> {
        self.played.push(effect);
        Ok(())
    }
}
