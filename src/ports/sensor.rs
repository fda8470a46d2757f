//! Sensor port - configuration and error types for the UV sensor
//!
//! These types describe how the UV sensor is configured and how it fails,
//! without tying the application to a particular bus implementation.

use crate::domain::{Calibration, Reading};
use crate::ports::output::OutputKind;

/// Error type for UV sensor operations
///
/// `E` is the transport error of the bus the sensor is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus transfer failed
    Bus(E),
    /// No device has been bound with `identify` yet
    NotBound,
    /// An output collaborator rejected the reading
    Output(OutputKind),
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus error: {:?}", e),
            Error::NotBound => f.write_str("device not bound"),
            Error::Output(kind) => write!(f, "output {:?} failed", kind),
        }
    }
}

/// Integration time of both UV channels
///
/// Encoded into bits 6:4 of the configuration register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IntegrationTime {
    #[default]
    Ms50,
    Ms100,
    Ms200,
    Ms400,
    Ms800,
}

impl IntegrationTime {
    /// Register field value (0-4)
    pub const fn bits(self) -> u8 {
        match self {
            IntegrationTime::Ms50 => 0,
            IntegrationTime::Ms100 => 1,
            IntegrationTime::Ms200 => 2,
            IntegrationTime::Ms400 => 3,
            IntegrationTime::Ms800 => 4,
        }
    }

    pub const fn as_millis(self) -> u16 {
        match self {
            IntegrationTime::Ms50 => 50,
            IntegrationTime::Ms100 => 100,
            IntegrationTime::Ms200 => 200,
            IntegrationTime::Ms400 => 400,
            IntegrationTime::Ms800 => 800,
        }
    }
}

/// Dynamic range setting (configuration register bit 3)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DynamicRange {
    #[default]
    Normal,
    High,
}

/// Configuration for the UV sensor
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Compensation coefficients for the sensor package
    pub calibration: Calibration,
    /// Integration time written on `start`
    pub integration_time: IntegrationTime,
    /// Dynamic range written on `start`
    pub dynamic_range: DynamicRange,
    /// Floor compensated UVA/UVB counts at zero
    ///
    /// Off by default: negative counts under artificial light are
    /// informative and are passed through to the outputs.
    pub clamp_channels: bool,
}

impl Config {
    /// Configuration for a package behind a diffuser or cover glass
    pub const fn with_calibration(calibration: Calibration) -> Self {
        Self {
            calibration,
            integration_time: IntegrationTime::Ms50,
            dynamic_range: DynamicRange::Normal,
            clamp_channels: false,
        }
    }

    /// Longer integration and high dynamic range for bright outdoor use
    pub const fn outdoor() -> Self {
        Self {
            calibration: Calibration::OPEN_AIR,
            integration_time: IntegrationTime::Ms100,
            dynamic_range: DynamicRange::High,
            clamp_channels: false,
        }
    }
}

/// Output flags passed to `start`
///
/// Flags are sticky: a `false` never clears a flag set by an earlier call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StartFlags {
    /// Emit a summary line from `log`
    pub logs: bool,
    /// Emit raw channel diagnostics on every `get`
    pub debug: bool,
}

impl StartFlags {
    pub const fn new(logs: bool, debug: bool) -> Self {
        Self { logs, debug }
    }

    /// Merge `other` into `self`; set flags stay set
    pub fn merge(&mut self, other: StartFlags) {
        self.logs |= other.logs;
        self.debug |= other.debug;
    }
}

/// Port for reading calibrated UV data
///
/// Implemented by the VEML6075 driver; lets application code and tests
/// work against any UV source.
pub trait UvSensorPort {
    /// Transport error of the underlying bus
    type BusError;

    /// Read all channels and compute a calibrated reading
    fn read(&mut self) -> Result<Reading, Error<Self::BusError>>;

    /// Whether the sensor has been detected and bound
    fn is_ready(&self) -> bool;

    /// Most recent reading, if any
    fn last_reading(&self) -> Option<Reading> {
        None
    }
}
