//! Face style presets.
//!
//! A [`FacePreset`] is the complete table of style constants that shape one
//! face variant: how finely the dial ring is subdivided, which subdivisions
//! get which kind of mark, the ratios that derive the named radii from the
//! outer radius, and which numeral rings are drawn. One engine consumes the
//! table; variants are data, not copies of the drawing code.
//!
//! The canonical [`DOUBLE_RING`] face subdivides the revolution into 720
//! steps (12 hours x 60 minutes): hour lines every 60 steps, half-hour dots
//! every 30, minute ticks every 12, with hour numerals on the even hour
//! positions and minute numerals on the odd ones.

/// Style-constant table for one face variant.
///
/// A ring period of 0 disables that mark kind entirely.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FacePreset {
    pub name: &'static str,

    /// Tick ring subdivisions per full revolution.
    pub steps: u32,
    /// Step period of major (hour) lines.
    pub major_every: u32,
    /// Step period of half-major (half-hour) dots.
    pub half_every: u32,
    /// Step period of minor (minute) ticks.
    pub minute_every: u32,

    /// Label box side as a fraction of the outer radius.
    pub label_box_num: i32,
    pub label_box_den: i32,
    /// Minute-tick radius inset from the outer radius, as a fraction of
    /// the label box.
    pub minute_tip_num: i32,
    pub minute_tip_den: i32,
    /// Hour-tick radius as a fraction of the minute-tick radius.
    pub hour_tip_num: i32,
    pub hour_tip_den: i32,

    /// Draw hour numerals on even hour positions.
    pub hour_numerals: bool,
    /// Draw minute numerals on odd hour positions.
    pub minute_numerals: bool,

    /// Stroke width of both hands, in pixels.
    pub hand_width: u32,
}

/// Canonical face: both numeral rings, full tick set.
pub const DOUBLE_RING: FacePreset = FacePreset {
    name: "double-ring",
    steps: 720,
    major_every: 60,
    half_every: 30,
    minute_every: 12,
    label_box_num: 7,
    label_box_den: 20,
    minute_tip_num: 2,
    minute_tip_den: 3,
    hour_tip_num: 4,
    hour_tip_den: 10,
    hour_numerals: true,
    minute_numerals: true,
    hand_width: 5,
};

/// Hour numerals only; the minute label band stays empty.
pub const HOURS_ONLY: FacePreset = FacePreset {
    name: "hours-only",
    steps: 720,
    major_every: 60,
    half_every: 30,
    minute_every: 12,
    label_box_num: 7,
    label_box_den: 20,
    minute_tip_num: 2,
    minute_tip_den: 3,
    hour_tip_num: 4,
    hour_tip_den: 10,
    hour_numerals: true,
    minute_numerals: false,
    hand_width: 5,
};

/// Stripped-down face: hour lines and half-hour dots, no minute ticks, no
/// numerals, slightly longer hands from the smaller label band.
pub const MINIMAL: FacePreset = FacePreset {
    name: "minimal",
    steps: 720,
    major_every: 60,
    half_every: 30,
    minute_every: 0,
    label_box_num: 1,
    label_box_den: 5,
    minute_tip_num: 1,
    minute_tip_den: 2,
    hour_tip_num: 4,
    hour_tip_den: 10,
    hour_numerals: false,
    minute_numerals: false,
    hand_width: 3,
};

/// Presets cycled by the host (P key), canonical face first.
pub const PRESETS: [&FacePreset; 3] = [&DOUBLE_RING, &HOURS_ONLY, &MINIMAL];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_periods_divide_steps() {
        for preset in PRESETS {
            for period in [preset.major_every, preset.half_every, preset.minute_every] {
                if period > 0 {
                    assert_eq!(
                        preset.steps % period,
                        0,
                        "{}: period {period} does not divide {}",
                        preset.name,
                        preset.steps
                    );
                }
            }
        }
    }

    #[test]
    fn test_ratios_are_proper_fractions() {
        for preset in PRESETS {
            assert!(preset.label_box_num < preset.label_box_den);
            assert!(preset.minute_tip_num <= preset.minute_tip_den);
            assert!(preset.hour_tip_num < preset.hour_tip_den);
            assert!(preset.hand_width > 0);
        }
    }

    #[test]
    fn test_preset_names_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
