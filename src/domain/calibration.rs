//! UV calibration domain service
//!
//! This module converts raw VEML6075 channel counts into compensated UVA/UVB
//! counts and a UV index, following the Vishay application note
//! "Designing the VEML6075 into an Application".

use crate::domain::{RawChannels, Reading};

/// Visible/IR compensation coefficients and channel responsivities
///
/// Computes:
/// ```text
/// uva_adjusted = round(uva - a * comp1 - b * comp2)
/// uvb_adjusted = round(uvb - c * comp1 - d * comp2)
/// uv_index     = max(0, (uva_adjusted * uva_resp + uvb_adjusted * uvb_resp) / 2)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// UVA visible-light coefficient ("a")
    pub uva_a: f64,
    /// UVA infrared coefficient ("b")
    pub uva_b: f64,
    /// UVB visible-light coefficient ("c")
    pub uvb_c: f64,
    /// UVB infrared coefficient ("d")
    pub uvb_d: f64,
    /// UVA responsivity (UVI per count)
    pub uva_resp: f64,
    /// UVB responsivity (UVI per count)
    pub uvb_resp: f64,
}

impl Calibration {
    /// Open-air package (no glass or teflon diffuser), datasheet values
    ///
    /// Matches breakout boards such as the Adafruit VEML6075.
    pub const OPEN_AIR: Self = Self {
        uva_a: 2.22,
        uva_b: 1.33,
        uvb_c: 2.95,
        uvb_d: 1.74,
        uva_resp: 0.001461,
        uvb_resp: 0.002591,
    };

    /// Create a calibration for a covered or diffused design
    pub const fn new(
        uva_a: f64,
        uva_b: f64,
        uvb_c: f64,
        uvb_d: f64,
        uva_resp: f64,
        uvb_resp: f64,
    ) -> Self {
        Self {
            uva_a,
            uva_b,
            uvb_c,
            uvb_d,
            uva_resp,
            uvb_resp,
        }
    }

    /// Compensated UVA count (may be negative)
    pub fn uva_adjusted(&self, raw: &RawChannels) -> i32 {
        round_half_up(
            f64::from(raw.uva) - self.uva_a * f64::from(raw.comp1) - self.uva_b * f64::from(raw.comp2),
        )
    }

    /// Compensated UVB count (may be negative)
    pub fn uvb_adjusted(&self, raw: &RawChannels) -> i32 {
        round_half_up(
            f64::from(raw.uvb) - self.uvb_c * f64::from(raw.comp1) - self.uvb_d * f64::from(raw.comp2),
        )
    }

    /// UV index before clamping, from already-compensated counts
    pub fn uv_index_unclamped(&self, uva_adjusted: i32, uvb_adjusted: i32) -> f64 {
        (f64::from(uva_adjusted) * self.uva_resp + f64::from(uvb_adjusted) * self.uvb_resp) / 2.0
    }

    /// Run the full compensation on one set of raw channels
    ///
    /// With `clamp_channels` the adjusted counts are floored at zero before
    /// the index is computed; otherwise negatives pass through.
    pub fn apply(&self, raw: &RawChannels, clamp_channels: bool) -> Reading {
        let mut uva = self.uva_adjusted(raw);
        let mut uvb = self.uvb_adjusted(raw);
        if clamp_channels {
            uva = uva.max(0);
            uvb = uvb.max(0);
        }
        Reading::new(uva, uvb, self.uv_index_unclamped(uva, uvb))
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::OPEN_AIR
    }
}

/// Round to nearest, ties toward positive infinity
///
/// `-2.5` rounds to `-2`, `2.5` to `3`. Used for the adjusted counts
/// only; the one-decimal index text rounds exact ties away from zero
/// instead (see `adapters::render::format_index`).
#[inline]
pub fn round_half_up(value: f64) -> i32 {
    libm::floor(value + 0.5) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UvLevel;

    #[test]
    fn test_open_air_worked_example() {
        let cal = Calibration::OPEN_AIR;
        let raw = RawChannels::new(2000, 1000, 50, 20);

        // 2000 - 111 - 26.6 = 1862.4
        assert_eq!(cal.uva_adjusted(&raw), 1862);
        // 1000 - 147.5 - 34.8 = 817.7
        assert_eq!(cal.uvb_adjusted(&raw), 818);

        let reading = cal.apply(&raw, false);
        // (1862 * 0.001461 + 818 * 0.002591) / 2
        assert!((reading.uv_index - 2.41991).abs() < 1e-6);
        assert_eq!(reading.uv_level, UvLevel::Low);
    }

    #[test]
    fn test_dark_sensor_gives_negative_counts_and_zero_index() {
        let cal = Calibration::OPEN_AIR;
        let raw = RawChannels::new(10, 5, 40, 30);

        let reading = cal.apply(&raw, false);
        assert!(reading.uva_adjusted < 0);
        assert!(reading.uvb_adjusted < 0);
        assert_eq!(reading.uv_index, 0.0);
        assert_eq!(reading.uv_level, UvLevel::Low);
    }

    #[test]
    fn test_clamp_channels_floors_counts() {
        let cal = Calibration::OPEN_AIR;
        let raw = RawChannels::new(10, 900, 40, 30);

        let reading = cal.apply(&raw, true);
        assert_eq!(reading.uva_adjusted, 0);
        assert!(reading.uvb_adjusted > 0);
        assert!(reading.uv_index > 0.0);
    }

    #[test]
    fn test_index_never_negative_for_any_raw_input() {
        let cal = Calibration::OPEN_AIR;
        let samples = [0u16, 1, 17, 255, 1024, 4096, 30000, u16::MAX];
        for &uva in &samples {
            for &uvb in &samples {
                for &comp1 in &samples {
                    for &comp2 in &samples {
                        let raw = RawChannels::new(uva, uvb, comp1, comp2);
                        assert!(cal.apply(&raw, false).uv_index >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_bright_sun_is_extreme() {
        let cal = Calibration::OPEN_AIR;
        // Midday tropical sun, very little visible/IR leakage
        let raw = RawChannels::new(9000, 5000, 20, 10);
        assert_eq!(cal.apply(&raw, false).uv_level, UvLevel::Extreme);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(1862.4), 1862);
        assert_eq!(round_half_up(817.7), 818);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(-0.4), 0);
    }

    #[test]
    fn test_custom_calibration() {
        let cal = Calibration::new(0.0, 0.0, 0.0, 0.0, 0.001, 0.001);
        let raw = RawChannels::new(3000, 3000, 500, 500);
        let reading = cal.apply(&raw, false);
        assert_eq!(reading.uva_adjusted, 3000);
        assert!((reading.uv_index - 3.0).abs() < 1e-9);
        assert_eq!(reading.uv_level, UvLevel::Moderate);
    }
}
