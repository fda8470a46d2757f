//! Output ports - displays and actuators fed from one UV reading
//!
//! Each peripheral driver lives outside this crate. The fan-out checks
//! `is_available()` before every render, so absent peripherals are skipped
//! silently.

use core::convert::Infallible;

/// Number of cells on the RGB LED matrix (5 x 5)
pub const RGB_CELLS: usize = 25;

/// Width of the monochrome LED matrix
pub const MONO_WIDTH: usize = 11;
/// Height of the monochrome LED matrix
pub const MONO_HEIGHT: usize = 7;
/// Number of cells on the monochrome LED matrix (11 x 7)
pub const MONO_CELLS: usize = MONO_WIDTH * MONO_HEIGHT;

/// Identifies which output failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputKind {
    TextPanel,
    RgbMatrix,
    MonoMatrix,
    SegmentDisplay,
    Haptic,
}

/// Character/graphics panel (e.g. SH1107 OLED)
///
/// Coordinates are a pixel column and a text row.
pub trait TextPanel {
    type Error: core::fmt::Debug;

    fn is_available(&self) -> bool;

    /// Switch the panel output on or off (contents are retained)
    fn set_power(&mut self, on: bool) -> Result<(), Self::Error>;

    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draw small text; `clear_rest` blanks the row after the text
    fn draw_text_small(&mut self, text: &str, x: u8, row: u8, clear_rest: bool)
        -> Result<(), Self::Error>;

    /// Draw medium (double height) text
    fn draw_text_medium(&mut self, text: &str, x: u8, row: u8, clear_rest: bool)
        -> Result<(), Self::Error>;

    /// Draw a horizontal separator line across `row`
    fn draw_separator(&mut self, row: u8) -> Result<(), Self::Error>;
}

/// RGB LED matrix (e.g. IS31FL3731 5x5 RGB breakout)
pub trait RgbMatrix {
    type Error: core::fmt::Debug;

    fn is_available(&self) -> bool;

    /// Show a full frame of packed `0xRRGGBB` colours, row-major
    fn show(&mut self, pixels: &[u32; RGB_CELLS]) -> Result<(), Self::Error>;
}

/// Monochrome LED matrix (e.g. IS31FL3731 11x7 white breakout)
pub trait MonoMatrix {
    type Error: core::fmt::Debug;

    fn is_available(&self) -> bool;

    /// Show a full frame of brightness values, row-major
    fn show(&mut self, pixels: &[u8; MONO_CELLS]) -> Result<(), Self::Error>;
}

/// Alphanumeric segment display (e.g. HT16K33 four-character backpack)
pub trait SegmentDisplay {
    type Error: core::fmt::Debug;

    fn is_available(&self) -> bool;

    fn show(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// Haptic actuator (e.g. DRV2605 with an ERM motor)
pub trait Haptic {
    type Error: core::fmt::Debug;

    fn is_available(&self) -> bool;

    /// Play a waveform from the actuator's effect library
    fn play(&mut self, effect: u8) -> Result<(), Self::Error>;
}

/// Placeholder for a peripheral that is not fitted
///
/// Reports itself unavailable, so nothing is ever rendered to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoOutput;

impl TextPanel for NoOutput {
    type Error = Infallible;

    fn is_available(&self) -> bool {
        false
    }

    fn set_power(&mut self, _on: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn draw_text_small(&mut self, _: &str, _: u8, _: u8, _: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    fn draw_text_medium(&mut self, _: &str, _: u8, _: u8, _: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    fn draw_separator(&mut self, _row: u8) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl RgbMatrix for NoOutput {
    type Error = Infallible;

    fn is_available(&self) -> bool {
        false
    }

    fn show(&mut self, _pixels: &[u32; RGB_CELLS]) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl MonoMatrix for NoOutput {
    type Error = Infallible;

    fn is_available(&self) -> bool {
        false
    }

    fn show(&mut self, _pixels: &[u8; MONO_CELLS]) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl SegmentDisplay for NoOutput {
    type Error = Infallible;

    fn is_available(&self) -> bool {
        false
    }

    fn show(&mut self, _text: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Haptic for NoOutput {
    type Error = Infallible;

    fn is_available(&self) -> bool {
        false
    }

    fn play(&mut self, _effect: u8) -> Result<(), Self::Error> {
        Ok(())
    }
}
