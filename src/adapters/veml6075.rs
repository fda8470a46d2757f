//! VEML6075 UV sensor adapter
//!
//! Driver for the Vishay VEML6075 UVA/UVB light sensor over any
//! [`RegisterBus`]. It owns the whole sensor state: the bound bus and
//! address, the output flags, the last reading and the haptic edge
//! detector. One instance per physical sensor; no globals.
//!
//! The expected call sequence is `identify` -> `start` -> repeated
//! `get`/`display` from the application's polling loop. Calls must be
//! serialized by the caller.
//!
//! # References
//! - Datasheet: <https://www.vishay.com/docs/84304/veml6075.pdf>
//! - Application note: <https://www.vishay.com/docs/84339/designingveml6075.pdf>

use core::fmt::{self, Write};

use heapless::String;

use crate::adapters::outputs::Outputs;
use crate::adapters::render::{self, HapticTrigger};
use crate::domain::{RawChannels, Reading};
use crate::ports::bus::RegisterBus;
use crate::ports::output::{Haptic, MonoMatrix, RgbMatrix, SegmentDisplay, TextPanel};
use crate::ports::sensor::{Config, DynamicRange, Error, StartFlags, UvSensorPort};

/// Default 7-bit bus address of the VEML6075
pub const DEFAULT_ADDRESS: u8 = 0x10;

/// Low byte of the ID register
pub const DEVICE_ID: u8 = 0x26;

/// Register map (command codes)
pub mod reg {
    /// UV_CONF: shutdown, trigger, dynamic range, integration time
    pub const CONF: u8 = 0x00;
    /// Uncalibrated UVA
    pub const UVA: u8 = 0x07;
    /// Uncalibrated UVB
    pub const UVB: u8 = 0x09;
    /// Visible-light compensation channel
    pub const UVCOMP1: u8 = 0x0a;
    /// Infrared compensation channel
    pub const UVCOMP2: u8 = 0x0b;
    /// Device ID (low byte 0x26)
    pub const ID: u8 = 0x0c;
}

/// UV_CONF bit: shut down
pub const CONF_SD: u8 = 0b0000_0001;
/// UV_CONF bit: high dynamic range
pub const CONF_HD: u8 = 0b0000_1000;
const CONF_IT_SHIFT: u8 = 4;

/// Capacity of one log line
pub const LOG_LINE_LEN: usize = 96;

/// One formatted summary line
pub type LogLine = String<LOG_LINE_LEN>;

/// UV_CONF value that powers the sensor on in continuous mode
pub const fn encode_conf(config: &Config) -> u8 {
    let hd = match config.dynamic_range {
        DynamicRange::Normal => 0,
        DynamicRange::High => CONF_HD,
    };
    (config.integration_time.bits() << CONF_IT_SHIFT) | hd
}

/// Why `identify` did not bind, carrying the caller's bus back
pub enum Unbound<B: RegisterBus> {
    /// The driver is already bound; the bus was not touched
    AlreadyBound(B),
    /// Something answered with a different ID word
    Mismatch(B, u16),
    /// Reading the ID register failed
    Bus(B, B::Error),
}

impl<B: RegisterBus> Unbound<B> {
    /// Take the bus back
    pub fn into_bus(self) -> B {
        match self {
            Unbound::AlreadyBound(bus) | Unbound::Mismatch(bus, _) | Unbound::Bus(bus, _) => bus,
        }
    }

    /// Transport error, if the probe failed on the bus
    pub fn bus_error(&self) -> Option<&B::Error> {
        match self {
            Unbound::Bus(_, e) => Some(e),
            _ => None,
        }
    }
}

impl<B: RegisterBus> fmt::Debug for Unbound<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unbound::AlreadyBound(_) => f.write_str("AlreadyBound"),
            Unbound::Mismatch(_, id) => write!(f, "Mismatch({:#06x})", id),
            Unbound::Bus(_, e) => f.debug_tuple("Bus").field(e).finish(),
        }
    }
}

/// Result of one `display` pass
#[derive(Clone, Debug, PartialEq)]
pub struct Displayed {
    /// The reading pushed to the outputs
    pub reading: Reading,
    /// Summary line, present on a full refresh with logs enabled
    pub log: Option<LogLine>,
}

/// Bus and address of a detected sensor
struct Binding<B> {
    bus: B,
    address: u8,
}

/// VEML6075 driver
pub struct Veml6075<B> {
    binding: Option<Binding<B>>,
    config: Config,
    flags: StartFlags,
    last_raw: Option<RawChannels>,
    last_reading: Option<Reading>,
    haptic: HapticTrigger,
}

impl<B: RegisterBus> Veml6075<B> {
    /// Create an unbound driver
    pub const fn new(config: Config) -> Self {
        Self {
            binding: None,
            config,
            flags: StartFlags::new(false, false),
            last_raw: None,
            last_reading: None,
            haptic: HapticTrigger::new(),
        }
    }

    /// Probe `address` and bind to it if a VEML6075 answers
    ///
    /// On success the driver keeps `bus`. Otherwise the bus is handed back
    /// inside [`Unbound`] so the caller can probe another address: when the
    /// driver is already bound (no bus traffic), when the ID register does
    /// not match, or when the read itself fails. Only the low byte of the
    /// ID word is compared.
    pub fn identify(&mut self, mut bus: B, address: u8) -> Result<(), Unbound<B>> {
        if self.binding.is_some() {
            return Err(Unbound::AlreadyBound(bus));
        }

        let id = match bus.read_word(address, reg::ID) {
            Ok(id) => id,
            Err(e) => return Err(Unbound::Bus(bus, e)),
        };
        if (id & 0x00ff) as u8 != DEVICE_ID {
            #[cfg(feature = "defmt")]
            defmt::warn!("VEML6075: unexpected id {=u16:#x} at {=u8:#x}", id, address);
            return Err(Unbound::Mismatch(bus, id));
        }

        #[cfg(feature = "defmt")]
        defmt::info!("VEML6075: found at {=u8:#x}", address);

        self.binding = Some(Binding { bus, address });
        Ok(())
    }

    /// Whether a sensor has been bound
    pub fn is_available(&self) -> bool {
        self.binding.is_some()
    }

    /// Bound bus address
    pub fn address(&self) -> Option<u8> {
        self.binding.as_ref().map(|b| b.address)
    }

    /// Enable output flags and (re)configure the sensor
    ///
    /// Flags only ever get set here, never cleared. The sensor is shut down
    /// first, then powered on in continuous mode with the configured
    /// integration time and dynamic range.
    pub fn start(&mut self, flags: StartFlags) -> Result<(), Error<B::Error>> {
        let binding = self.binding.as_mut().ok_or(Error::NotBound)?;
        self.flags.merge(flags);

        let conf = encode_conf(&self.config);
        binding
            .bus
            .write_byte(binding.address, reg::CONF, CONF_SD)
            .map_err(Error::Bus)?;
        binding
            .bus
            .write_byte(binding.address, reg::CONF, conf)
            .map_err(Error::Bus)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "VEML6075: started, conf={=u8:#x} it={=u16}ms",
            conf,
            self.config.integration_time.as_millis()
        );

        Ok(())
    }

    /// Does nothing
    ///
    /// The sensor keeps converting after `stop`; it is not shut down.
    pub fn stop(&mut self) {}

    /// Read all four channels and compute a calibrated reading
    pub fn get(&mut self) -> Result<Reading, Error<B::Error>> {
        let raw = self.read_raw()?;
        let reading = self.config.calibration.apply(&raw, self.config.clamp_channels);

        #[cfg(feature = "defmt")]
        if self.flags.debug {
            defmt::debug!(
                "VEML6075: raw {} | {=i32} {=i32} | {=f64} (level {=u8})",
                raw,
                reading.uva_adjusted,
                reading.uvb_adjusted,
                reading.uv_index,
                reading.uv_level.value()
            );
        }

        self.last_raw = Some(raw);
        self.last_reading = Some(reading);
        Ok(reading)
    }

    fn read_raw(&mut self) -> Result<RawChannels, Error<B::Error>> {
        let binding = self.binding.as_mut().ok_or(Error::NotBound)?;
        let mut read = |register| {
            binding
                .bus
                .read_word(binding.address, register)
                .map_err(Error::Bus)
        };

        let uva = read(reg::UVA)?;
        let uvb = read(reg::UVB)?;
        let comp1 = read(reg::UVCOMP1)?;
        let comp2 = read(reg::UVCOMP2)?;
        Ok(RawChannels::new(uva, uvb, comp1, comp2))
    }

    /// Summary line for the last reading, emitted when logs are enabled
    ///
    /// Returns `None` when logs are off or nothing has been read yet.
    pub fn log(&self) -> Option<LogLine> {
        if !self.flags.logs {
            return None;
        }
        let line = format_log_line(&self.last_reading?);

        #[cfg(feature = "defmt")]
        defmt::info!("{=str}", line.as_str());

        Some(line)
    }

    /// Take a reading and push it to every available output
    ///
    /// With `refresh_all` the text panel is redrawn from scratch and the
    /// summary line is logged and returned.
    pub fn display<T, R, M, S, H>(
        &mut self,
        outputs: &mut Outputs<T, R, M, S, H>,
        refresh_all: bool,
    ) -> Result<Displayed, Error<B::Error>>
    where
        T: TextPanel,
        R: RgbMatrix,
        M: MonoMatrix,
        S: SegmentDisplay,
        H: Haptic,
    {
        let reading = self.get()?;
        outputs
            .render(&reading, refresh_all, &mut self.haptic)
            .map_err(Error::Output)?;

        let log = if refresh_all { self.log() } else { None };
        Ok(Displayed { reading, log })
    }

    /// Most recent reading
    pub fn last_reading(&self) -> Option<Reading> {
        self.last_reading
    }

    /// Raw channels behind the most recent reading (for diagnostics)
    pub fn last_raw(&self) -> Option<RawChannels> {
        self.last_raw
    }

    /// Enabled output flags
    pub fn flags(&self) -> StartFlags {
        self.flags
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration
    ///
    /// Calibration applies from the next `get`; integration time and
    /// dynamic range reach the sensor on the next `start`.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Release the bound bus, leaving the driver unbound
    pub fn release(self) -> Option<B> {
        self.binding.map(|b| b.bus)
    }
}

impl<B: RegisterBus> Default for Veml6075<B> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<B: RegisterBus> UvSensorPort for Veml6075<B> {
    type BusError = B::Error;

    fn read(&mut self) -> Result<Reading, Error<Self::BusError>> {
        self.get()
    }

    fn is_ready(&self) -> bool {
        self.is_available()
    }

    fn last_reading(&self) -> Option<Reading> {
        self.last_reading
    }
}

/// Format the summary line for one reading
///
/// `VEML6075 -> UVA 1862 / UVB 818 / UV Index 2.4 (Low).`
pub fn format_log_line(reading: &Reading) -> LogLine {
    let mut line = LogLine::new();
    // Two i32s, a PanelText index and the longest label: at most 82 bytes
    let _ = write!(
        line,
        "VEML6075 -> UVA {} / UVB {} / UV Index {} ({}).",
        reading.uva_adjusted,
        reading.uvb_adjusted,
        render::format_index(reading.uv_index),
        reading.uv_level.label()
    );
    line
}
