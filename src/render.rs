//! Face renderer: turns a theme, a geometry, and a clock reading into draw
//! calls.
//!
//! Stacking order is fixed and matters: background fill, then tick marks in
//! ring order, then numerals (punching a contrast disc first on monochrome
//! panels), then the minute hand, then the hour hand on top. Re-rendering
//! with identical inputs produces an identical image; the renderer keeps no
//! state between frames.
//!
//! Drawing is generic over any `DrawTarget<Color = Rgb565>`. The renderer
//! itself never fails; errors are the target's own and propagate unchanged.

use core::fmt::Write as _;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
    text::Text,
};
use heapless::String;

use crate::config::DisplayCapability;
use crate::layout::{ClockReading, FaceGeometry, Numeral, TickKind, generate_ticks, polar_to_cartesian};
use crate::presets::FacePreset;
use crate::styles::{CENTERED_MIDDLE, numeral_font};
use crate::theme::Theme;

/// Diameter of a half-hour dot.
const HALF_DOT_DIAMETER: u32 = 3;

/// Stateless face renderer bound to one style preset and panel capability.
pub struct FaceRenderer {
    pub preset: &'static FacePreset,
    pub capability: DisplayCapability,
}

impl FaceRenderer {
    pub const fn new(preset: &'static FacePreset, capability: DisplayCapability) -> Self {
        Self { preset, capability }
    }

    /// Render one complete frame.
    pub fn render<D>(
        &self,
        display: &mut D,
        theme: &Theme,
        geometry: &FaceGeometry,
        reading: &ClockReading,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(theme.background)?;

        // Tick pass. Numerals come afterwards so no tick line crosses them.
        let major_style =
            PrimitiveStyle::with_stroke(theme.major_tick, u32::from(theme.major_tick_width));
        let minor_style =
            PrimitiveStyle::with_stroke(theme.minor_minute_tick, u32::from(theme.minor_tick_width));
        let dot_style = PrimitiveStyle::with_fill(theme.minor_hour_tick);

        for tick in generate_ticks(self.preset) {
            match tick.kind {
                TickKind::Major => {
                    // Monochrome panels keep the center clear so the hands
                    // stay readable against twelve crossing lines.
                    let inner = if self.capability.is_monochrome() {
                        polar_to_cartesian(geometry.center, geometry.minute_tick, tick.turns)
                    } else {
                        geometry.center
                    };
                    let outer = polar_to_cartesian(geometry.center, geometry.sweep, tick.turns);
                    Line::new(inner, outer).into_styled(major_style).draw(display)?;
                }
                TickKind::HalfMajor => {
                    let at = polar_to_cartesian(geometry.center, geometry.half_dot, tick.turns);
                    Circle::with_center(at, HALF_DOT_DIAMETER)
                        .into_styled(dot_style)
                        .draw(display)?;
                }
                TickKind::Minor => {
                    let inner =
                        polar_to_cartesian(geometry.center, geometry.minute_tick, tick.turns);
                    let outer = polar_to_cartesian(geometry.center, geometry.sweep, tick.turns);
                    Line::new(inner, outer).into_styled(minor_style).draw(display)?;
                }
            }
        }

        // Numeral pass.
        for tick in generate_ticks(self.preset) {
            if let Some(numeral) = tick.numeral {
                self.draw_numeral(display, theme, geometry, numeral, tick.turns)?;
            }
        }

        // Hands: minute below hour, both anchored at the center.
        let hand = |radius: i32, turns: f32| polar_to_cartesian(geometry.center, radius, turns);
        Line::new(geometry.center, hand(geometry.minute_hand, reading.minute_turns))
            .into_styled(PrimitiveStyle::with_stroke(theme.minute, self.preset.hand_width))
            .draw(display)?;
        Line::new(geometry.center, hand(geometry.hour_hand, reading.hour_turns))
            .into_styled(PrimitiveStyle::with_stroke(theme.hour, self.preset.hand_width))
            .draw(display)?;

        Ok(())
    }

    /// Draw one numeral at its band radius and its own angle.
    fn draw_numeral<D>(
        &self,
        display: &mut D,
        theme: &Theme,
        geometry: &FaceGeometry,
        numeral: Numeral,
        turns: f32,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let (band, color, value) = match numeral {
            Numeral::Hour(h) => (geometry.hour_label_band, theme.hour, h),
            Numeral::Minute(m) => (geometry.minute_label_band, theme.minute, m),
        };
        let anchor = polar_to_cartesian(geometry.center, band, turns);

        // Without color depth the numerals need a clean disc to stay
        // legible where tick lines cross the label band.
        if self.capability.is_monochrome() && geometry.label_box > 0 {
            Circle::with_center(anchor, geometry.label_box as u32)
                .into_styled(PrimitiveStyle::with_fill(theme.background))
                .draw(display)?;
        }

        let mut text: String<4> = String::new();
        let _ = write!(text, "{value}");
        let style = MonoTextStyle::new(numeral_font(geometry.label_box), color);
        Text::with_text_style(&text, anchor, style, CENTERED_MIDDLE).draw(display)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
