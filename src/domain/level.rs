//! UV index severity classification
//!
//! Maps the continuous UV index onto the five WHO exposure categories.
//! Breakpoints are exclusive on the upper side: an index of exactly 2.9
//! is still `Low`, anything above it is `Moderate`.

/// Discrete UV exposure level (1 = Low ... 5 = Extreme)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum UvLevel {
    #[default]
    Low = 1,
    Moderate = 2,
    High = 3,
    VeryHigh = 4,
    Extreme = 5,
}

/// Ordered breakpoint table, scanned highest first.
///
/// An index strictly greater than the threshold selects the level.
pub const LEVEL_THRESHOLDS: [(f64, UvLevel); 4] = [
    (10.9, UvLevel::Extreme),
    (7.9, UvLevel::VeryHigh),
    (5.9, UvLevel::High),
    (2.9, UvLevel::Moderate),
];

// Table must stay sorted for the first-match scan to be correct
const _: () = assert!(LEVEL_THRESHOLDS[0].0 > LEVEL_THRESHOLDS[1].0);
const _: () = assert!(LEVEL_THRESHOLDS[1].0 > LEVEL_THRESHOLDS[2].0);
const _: () = assert!(LEVEL_THRESHOLDS[2].0 > LEVEL_THRESHOLDS[3].0);

impl UvLevel {
    /// All levels in ascending severity
    pub const ALL: [UvLevel; 5] = [
        UvLevel::Low,
        UvLevel::Moderate,
        UvLevel::High,
        UvLevel::VeryHigh,
        UvLevel::Extreme,
    ];

    /// Classify a UV index
    ///
    /// Total over `f64`: negative values and NaN fall through to `Low`.
    pub fn from_index(uv_index: f64) -> Self {
        LEVEL_THRESHOLDS
            .iter()
            .find(|(threshold, _)| uv_index > *threshold)
            .map(|(_, level)| *level)
            .unwrap_or(UvLevel::Low)
    }

    /// Build a level from its numeric value (1-5)
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(UvLevel::Low),
            2 => Some(UvLevel::Moderate),
            3 => Some(UvLevel::High),
            4 => Some(UvLevel::VeryHigh),
            5 => Some(UvLevel::Extreme),
            _ => None,
        }
    }

    /// Numeric severity (1-5)
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Human readable label, as used in log lines
    pub const fn label(self) -> &'static str {
        match self {
            UvLevel::Low => "Low",
            UvLevel::Moderate => "Moderate",
            UvLevel::High => "High",
            UvLevel::VeryHigh => "Very High",
            UvLevel::Extreme => "Extreme",
        }
    }

    /// Upper-case label for small panels
    pub const fn panel_label(self) -> &'static str {
        match self {
            UvLevel::Low => "LOW",
            UvLevel::Moderate => "MODERATE",
            UvLevel::High => "HIGH",
            UvLevel::VeryHigh => "VERY HIGH",
            UvLevel::Extreme => "EXTREME",
        }
    }
}
