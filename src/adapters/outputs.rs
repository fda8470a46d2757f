//! Output fan-out
//!
//! Pushes one reading to every fitted peripheral: the text panel, both LED
//! matrices, the segment display and the haptic actuator.

use crate::adapters::render::{self, HapticTrigger};
use crate::domain::Reading;
use crate::ports::output::{
    Haptic, MonoMatrix, NoOutput, OutputKind, RgbMatrix, SegmentDisplay, TextPanel,
};

/// Panel name shown in the footer
const PANEL_FOOTER: &str = "VEML6075";

/// The set of output peripherals fed by `display`
///
/// Start from [`Outputs::none`] and add what is fitted:
///
/// ```ignore
/// let mut outputs = Outputs::none()
///     .with_text_panel(oled)
///     .with_haptic(drv2605);
/// sensor.display(&mut outputs, true)?;
/// ```
pub struct Outputs<T = NoOutput, R = NoOutput, M = NoOutput, S = NoOutput, H = NoOutput> {
    pub text_panel: T,
    pub rgb_matrix: R,
    pub mono_matrix: M,
    pub segment_display: S,
    pub haptic: H,
}

impl Outputs {
    /// No peripherals fitted
    pub const fn none() -> Self {
        Self {
            text_panel: NoOutput,
            rgb_matrix: NoOutput,
            mono_matrix: NoOutput,
            segment_display: NoOutput,
            haptic: NoOutput,
        }
    }
}

impl Default for Outputs {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, R, M, S, H> Outputs<T, R, M, S, H> {
    pub fn with_text_panel<T2: TextPanel>(self, text_panel: T2) -> Outputs<T2, R, M, S, H> {
        Outputs {
            text_panel,
            rgb_matrix: self.rgb_matrix,
            mono_matrix: self.mono_matrix,
            segment_display: self.segment_display,
            haptic: self.haptic,
        }
    }

    pub fn with_rgb_matrix<R2: RgbMatrix>(self, rgb_matrix: R2) -> Outputs<T, R2, M, S, H> {
        Outputs {
            text_panel: self.text_panel,
            rgb_matrix,
            mono_matrix: self.mono_matrix,
            segment_display: self.segment_display,
            haptic: self.haptic,
        }
    }

    pub fn with_mono_matrix<M2: MonoMatrix>(self, mono_matrix: M2) -> Outputs<T, R, M2, S, H> {
        Outputs {
            text_panel: self.text_panel,
            rgb_matrix: self.rgb_matrix,
            mono_matrix,
            segment_display: self.segment_display,
            haptic: self.haptic,
        }
    }

    pub fn with_segment_display<S2: SegmentDisplay>(
        self,
        segment_display: S2,
    ) -> Outputs<T, R, M, S2, H> {
        Outputs {
            text_panel: self.text_panel,
            rgb_matrix: self.rgb_matrix,
            mono_matrix: self.mono_matrix,
            segment_display,
            haptic: self.haptic,
        }
    }

    pub fn with_haptic<H2: Haptic>(self, haptic: H2) -> Outputs<T, R, M, S, H2> {
        Outputs {
            text_panel: self.text_panel,
            rgb_matrix: self.rgb_matrix,
            mono_matrix: self.mono_matrix,
            segment_display: self.segment_display,
            haptic,
        }
    }
}

impl<T, R, M, S, H> Outputs<T, R, M, S, H>
where
    T: TextPanel,
    R: RgbMatrix,
    M: MonoMatrix,
    S: SegmentDisplay,
    H: Haptic,
{
    /// Render `reading` on every available peripheral
    ///
    /// `refresh_all` redraws the static parts of the text panel. The haptic
    /// trigger only advances while an actuator is available.
    pub fn render(
        &mut self,
        reading: &Reading,
        refresh_all: bool,
        trigger: &mut HapticTrigger,
    ) -> Result<(), OutputKind> {
        if self.text_panel.is_available() {
            draw_panel(&mut self.text_panel, reading, refresh_all)
                .map_err(|_| OutputKind::TextPanel)?;
        }

        if self.rgb_matrix.is_available() {
            self.rgb_matrix
                .show(&render::rgb_icon(reading.uv_level))
                .map_err(|_| OutputKind::RgbMatrix)?;
        }

        if self.mono_matrix.is_available() {
            self.mono_matrix
                .show(render::glyph(reading.uv_level))
                .map_err(|_| OutputKind::MonoMatrix)?;
        }

        if self.segment_display.is_available() {
            self.segment_display
                .show(&render::segment_code(reading.uv_level))
                .map_err(|_| OutputKind::SegmentDisplay)?;
        }

        if self.haptic.is_available() {
            if let Some(effect) = trigger.update(reading.uv_level) {
                self.haptic
                    .play(effect)
                    .map_err(|_| OutputKind::Haptic)?;
            }
        }

        Ok(())
    }
}

fn draw_panel<P: TextPanel>(panel: &mut P, reading: &Reading, refresh_all: bool) -> Result<(), P::Error> {
    if refresh_all {
        panel.set_power(false)?;
        panel.clear()?;
        panel.draw_text_small("UVA:", 4, 0, false)?;
        panel.draw_text_small("UVB:", 4, 2, false)?;
        panel.draw_separator(5)?;
        panel.draw_text_small("UV INDEX:", 4, 7, false)?;
        panel.draw_text_small(PANEL_FOOTER, 33, 16, false)?;
    }

    panel.draw_text_small(&render::format_count(reading.uva_adjusted), 60, 0, true)?;
    panel.draw_text_small(&render::format_count(reading.uvb_adjusted), 60, 2, true)?;
    panel.draw_text_medium(&render::format_index(reading.uv_index), 4, 9, true)?;
    panel.draw_text_small(reading.uv_level.panel_label(), 60, 10, true)?;

    if refresh_all {
        panel.set_power(true)?;
    }
    Ok(())
}
