//! UV reading domain entity
//!
//! This module defines the core domain entities produced by the driver.
//! It has no knowledge of how readings are acquired or rendered.

use crate::domain::UvLevel;

/// Raw register contents of one measurement cycle
///
/// Kept for diagnostics; the compensation channels are the visible-light
/// (`comp1`) and infrared (`comp2`) leakage photodiodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawChannels {
    /// Uncalibrated UVA count
    pub uva: u16,
    /// Uncalibrated UVB count
    pub uvb: u16,
    /// Visible-light compensation channel
    pub comp1: u16,
    /// Infrared compensation channel
    pub comp2: u16,
}

impl RawChannels {
    pub const fn new(uva: u16, uvb: u16, comp1: u16, comp2: u16) -> Self {
        Self {
            uva,
            uvb,
            comp1,
            comp2,
        }
    }
}

/// A calibrated UV reading
///
/// The adjusted channel counts may be negative: under indoor or artificial
/// lighting the compensation terms can exceed the raw UV counts. Only the
/// UV index is clamped at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Compensated UVA count
    pub uva_adjusted: i32,
    /// Compensated UVB count
    pub uvb_adjusted: i32,
    /// UV index, never negative
    pub uv_index: f64,
    /// Severity level derived from `uv_index`
    pub uv_level: UvLevel,
}

impl Reading {
    /// Create a reading, clamping the index and deriving its level
    pub fn new(uva_adjusted: i32, uvb_adjusted: i32, uv_index: f64) -> Self {
        let uv_index = if uv_index > 0.0 { uv_index } else { 0.0 };
        Self {
            uva_adjusted,
            uvb_adjusted,
            uv_index,
            uv_level: UvLevel::from_index(uv_index),
        }
    }
}
