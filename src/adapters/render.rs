//! Rendering helpers for the output peripherals
//!
//! Pure functions turning a reading or level into what each peripheral
//! displays. Colours follow the WHO UV index scale
//! (green, yellow, orange, red, violet).

use core::fmt::Write;

use heapless::String;

use crate::domain::UvLevel;
use crate::ports::output::{MONO_CELLS, RGB_CELLS};

/// Short numeric text for the panel ("-123", "4.2")
pub type PanelText = String<12>;

/// Segment display code ("UVI3")
pub type SegmentCode = String<4>;

/// Cells lit on the RGB matrix: the centre 3x3 block of the 5x5 grid
pub const RGB_ICON_CELLS: [usize; 9] = [6, 7, 8, 11, 12, 13, 16, 17, 18];

/// Packed `0xRRGGBB` colour for a level
pub const fn level_color(level: UvLevel) -> u32 {
    match level {
        UvLevel::Low => 0x008800,
        UvLevel::Moderate => 0xaa8800,
        UvLevel::High => 0xaa4400,
        UvLevel::VeryHigh => 0xaa0000,
        UvLevel::Extreme => 0x6600aa,
    }
}

/// Full RGB matrix frame for a level
pub fn rgb_icon(level: UvLevel) -> [u32; RGB_CELLS] {
    let mut icon = [0u32; RGB_CELLS];
    let color = level_color(level);
    for &cell in RGB_ICON_CELLS.iter() {
        icon[cell] = color;
    }
    icon
}

// 11x7 brightness bitmaps spelling the first three letters of each level
const GLYPH_LOW: [u8; MONO_CELLS] = [
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, //
    50, 20, 20, 20, 35, 50, 35, 20, 50, 20, 50, //
    50, 20, 20, 20, 50, 20, 50, 20, 50, 20, 50, //
    50, 20, 20, 20, 50, 20, 50, 20, 50, 35, 50, //
    50, 20, 20, 20, 50, 20, 50, 20, 50, 50, 50, //
    50, 50, 50, 20, 35, 50, 35, 20, 50, 20, 50, //
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, //
];

const GLYPH_MOD: [u8; MONO_CELLS] = [
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, //
    50, 20, 50, 20, 35, 50, 35, 20, 50, 50, 20, //
    50, 50, 50, 20, 50, 20, 50, 20, 50, 20, 50, //
    50, 35, 50, 20, 50, 20, 50, 20, 50, 20, 50, //
    50, 20, 50, 20, 50, 20, 50, 20, 50, 20, 50, //
    50, 20, 50, 20, 35, 50, 35, 20, 50, 50, 20, //
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, //
];

const GLYPH_HIG: [u8; MONO_CELLS] = [
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, //
    50, 20, 20, 50, 20, 50, 20, 20, 50, 50, 20, //
    50, 20, 20, 50, 20, 50, 20, 50, 20, 20, 20, //
    50, 50, 50, 50, 20, 50, 20, 50, 20, 50, 50, //
    50, 20, 20, 50, 20, 50, 20, 50, 20, 20, 50, //
    50, 20, 20, 50, 20, 50, 20, 20, 50, 50, 20, //
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, //
];

const GLYPH_VER: [u8; MONO_CELLS] = [
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, //
    50, 20, 50, 20, 50, 50, 50, 20, 50, 50, 20, //
    50, 20, 50, 20, 50, 20, 20, 20, 50, 20, 50, //
    50, 20, 50, 20, 50, 50, 50, 20, 50, 50, 20, //
    50, 35, 50, 20, 50, 20, 20, 20, 50, 20, 50, //
    20, 50, 20, 20, 50, 50, 50, 20, 50, 20, 50, //
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, //
];

const GLYPH_EXT: [u8; MONO_CELLS] = [
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, //
    50, 50, 50, 20, 50, 20, 50, 20, 50, 50, 50, //
    50, 20, 20, 20, 50, 20, 50, 20, 20, 50, 20, //
    50, 50, 50, 20, 20, 50, 20, 20, 20, 50, 20, //
    50, 20, 20, 20, 50, 20, 50, 20, 20, 50, 20, //
    50, 50, 50, 20, 50, 20, 50, 20, 20, 50, 20, //
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, //
];

/// Monochrome matrix bitmap for a level
pub const fn glyph(level: UvLevel) -> &'static [u8; MONO_CELLS] {
    match level {
        UvLevel::Low => &GLYPH_LOW,
        UvLevel::Moderate => &GLYPH_MOD,
        UvLevel::High => &GLYPH_HIG,
        UvLevel::VeryHigh => &GLYPH_VER,
        UvLevel::Extreme => &GLYPH_EXT,
    }
}

/// Segment display code, `"UVI"` followed by the level digit
pub fn segment_code(level: UvLevel) -> SegmentCode {
    let mut code = SegmentCode::new();
    // "UVI" + one digit always fits
    let _ = write!(code, "UVI{}", level.value());
    code
}

/// Integer count, no decimals
pub fn format_count(count: i32) -> PanelText {
    let mut text = PanelText::new();
    let _ = write!(text, "{}", count);
    text
}

/// Marker shown when a value does not fit its text buffer
pub const OVERFLOW_TEXT: &str = "--";

/// UV index with one decimal
///
/// Exact binary ties (`0.25`, `1.75`, ...) round away from zero rather
/// than to even, so `0.25` reads `0.3`. Values too long for [`PanelText`]
/// show [`OVERFLOW_TEXT`].
pub fn format_index(uv_index: f64) -> PanelText {
    let mut text = PanelText::new();
    if write!(text, "{:.1}", tie_away_from_zero(uv_index)).is_err() {
        text.clear();
        let _ = text.push_str(OVERFLOW_TEXT);
    }
    text
}

// x.x5 ties are exactly the multiples of 0.25 with an odd quarter count
fn tie_away_from_zero(value: f64) -> f64 {
    let quarters = value * 4.0;
    if libm::floor(quarters) == quarters && libm::fmod(quarters, 2.0) != 0.0 {
        libm::nextafter(value, value.signum() * f64::INFINITY)
    } else {
        value
    }
}

/// Haptic effect played when entering a level, if any
///
/// Effect ids index the DRV2605 ROM library: 10 = double click,
/// 12 = triple click, 16 = 1000 ms alert.
pub const fn haptic_effect(level: UvLevel) -> Option<u8> {
    match level {
        UvLevel::High => Some(10),
        UvLevel::VeryHigh => Some(12),
        UvLevel::Extreme => Some(16),
        UvLevel::Low | UvLevel::Moderate => None,
    }
}

/// Edge detector for haptic feedback
///
/// Fires only when the level changes, and only for levels that carry an
/// effect. Starts at `Low`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HapticTrigger {
    previous: UvLevel,
}

impl HapticTrigger {
    pub const fn new() -> Self {
        Self {
            previous: UvLevel::Low,
        }
    }

    /// Level seen on the last update
    pub const fn previous(&self) -> UvLevel {
        self.previous
    }

    /// Record `level`, returning the effect to play on a transition
    pub fn update(&mut self, level: UvLevel) -> Option<u8> {
        if level == self.previous {
            return None;
        }
        self.previous = level;
        haptic_effect(level)
    }
}

impl Default for HapticTrigger {
    fn default() -> Self {
        Self::new()
    }
}
