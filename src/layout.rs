//! Radial layout engine.
//!
//! Pure geometry: every function here maps (time, screen bounds, style
//! constants) to points, radii, and angles without touching a display or
//! any other state. Angles are expressed in **turns** (fractions of a full
//! revolution), with 0 at the twelve o'clock position and values increasing
//! clockwise; [`polar_to_cartesian`] is the single primitive that converts
//! a (radius, turns) pair into screen coordinates, and everything else
//! composes it.
//!
//! # Derived radii
//!
//! [`FaceGeometry`] names every radius the renderer needs, derived from the
//! smaller screen dimension with the integer ratios carried by the active
//! [`FacePreset`]:
//!
//! ```text
//! outer        = min(w, h) / 2 - shape inset
//! label_box    = outer * 7 / 20
//! minute_tick  = outer - label_box * 2 / 3
//! hour_tick    = minute_tick * 4 / 10
//! ```
//!
//! (ratio values shown for the canonical preset). The bands holding the
//! numerals sit midway between adjacent rings, and the "sweep" radius is
//! twice the outer radius so radial lines cover the corners of rectangular
//! panels regardless of corner distance.

use embedded_graphics::prelude::*;

use crate::config::DisplayShape;
use crate::presets::FacePreset;

// =============================================================================
// Polar Primitive
// =============================================================================

/// Convert a polar position on the dial to screen coordinates.
///
/// `turns` is the fraction of a full revolution measured clockwise from the
/// twelve o'clock position. `turns = 0.0` maps exactly to the point
/// straight above the center; a radius of 0 maps to the center for every
/// angle. Results are rounded to the nearest pixel.
pub fn polar_to_cartesian(center: Point, radius: i32, turns: f32) -> Point {
    let angle = turns * core::f32::consts::TAU;
    let dx = radius as f32 * angle.sin();
    let dy = radius as f32 * angle.cos();
    Point::new(center.x + dx.round() as i32, center.y - dy.round() as i32)
}

// =============================================================================
// Face Geometry
// =============================================================================

/// Center point and named radii for one screen size.
///
/// All radii are non-negative and ordered
/// `hour_tick <= minute_tick <= outer`, so the rings never overlap.
/// Recomputed fresh on every redraw; never stored across frames.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaceGeometry {
    pub center: Point,
    /// Outer visual clipping radius of the dial.
    #[allow(dead_code)] // Only read in tests; the renderer works from the derived radii
    pub outer: i32,
    /// Outer end of the minute tick ring, inner end of the minute label band.
    pub minute_tick: i32,
    /// Hour tick radius, inner end of the hour label band.
    #[allow(dead_code)] // Only read in tests; the renderer works from the derived radii
    pub hour_tick: i32,
    /// Anchor radius for hour numerals.
    pub hour_label_band: i32,
    /// Anchor radius for minute numerals.
    pub minute_label_band: i32,
    /// Radius of the half-hour dot ring.
    pub half_dot: i32,
    /// "Infinite" radius for radial lines; covers any corner of the panel.
    pub sweep: i32,
    /// Minute hand length.
    pub minute_hand: i32,
    /// Hour hand length.
    pub hour_hand: i32,
    /// Side of the square box reserved for one numeral.
    pub label_box: i32,
}

impl FaceGeometry {
    /// Derive the face geometry for a screen.
    ///
    /// Degenerate bounds (smaller than twice the shape inset) clamp every
    /// radius at 0 rather than producing negative values.
    pub fn compute(bounds: Size, shape: DisplayShape, preset: &FacePreset) -> Self {
        let w = bounds.width as i32;
        let h = bounds.height as i32;
        let center = Point::new(w / 2, h / 2);

        let outer = (w.min(h) / 2 - shape.inset()).max(0);
        let label_box = outer * preset.label_box_num / preset.label_box_den;
        let minute_tick = (outer - label_box * preset.minute_tip_num / preset.minute_tip_den).max(0);
        let hour_tick = minute_tick * preset.hour_tip_num / preset.hour_tip_den;

        Self {
            center,
            outer,
            minute_tick,
            hour_tick,
            hour_label_band: (hour_tick + minute_tick) / 2,
            minute_label_band: (minute_tick + outer) / 2 + 1,
            half_dot: (minute_tick - 6).max(0),
            sweep: outer * 2,
            minute_hand: (outer - 2).max(0),
            hour_hand: (minute_tick - 10).max(0),
            label_box,
        }
    }
}

// =============================================================================
// Clock Reading
// =============================================================================

/// One wall-clock sample expressed as hand angles.
///
/// Ephemeral; recomputed from the absolute time on every redraw, so ticks
/// skipped during device sleep self-correct without special handling.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ClockReading {
    /// Hour hand angle in turns, `[0, 1)`.
    pub hour_turns: f32,
    /// Minute hand angle in turns, `[0, 1)`.
    pub minute_turns: f32,
}

impl ClockReading {
    /// Build a reading from a 24-hour wall-clock time.
    ///
    /// The hour hand advances continuously: 720 minute-of-half-day steps
    /// per revolution, so 00:30 puts it 30/720 of a turn past twelve.
    pub fn new(hour: u8, minute: u8) -> Self {
        let minute_turns = f32::from(minute) / 60.0;
        let hour_turns = f32::from(u16::from(hour % 12) * 60 + u16::from(minute)) / 720.0;
        Self { hour_turns, minute_turns }
    }
}

// =============================================================================
// Tick Ring
// =============================================================================

/// Kind of mark at one dial subdivision.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickKind {
    /// Hour line, drawn edge to edge through the label bands.
    Major,
    /// Half-hour dot on the shortened ring.
    HalfMajor,
    /// Minute tick at the rim.
    Minor,
}

/// Numeral attached to a major tick position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Numeral {
    /// Hour number (2, 4, .. 12) on the inner label band.
    Hour(u8),
    /// Minute number (5, 15, .. 55) on the outer label band.
    Minute(u8),
}

/// One drawable mark on the dial ring.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TickMark {
    /// Subdivision index, `0..preset.steps`, increasing clockwise from top.
    #[allow(dead_code)] // Only read in tests; drawing goes through `turns`
    pub step: u32,
    /// Angular position in turns.
    pub turns: f32,
    pub kind: TickKind,
    /// Numeral sharing this angular position, if the preset labels it.
    pub numeral: Option<Numeral>,
}

/// Generate the dial marks for one revolution, in increasing step order.
///
/// Classification is modulo arithmetic on the step index against the
/// preset's ring periods; a step matching none of them yields no mark.
/// The iterator is finite and restartable; the renderer walks it twice so
/// numerals stack above every tick line.
pub fn generate_ticks(preset: &FacePreset) -> impl Iterator<Item = TickMark> + '_ {
    (0..preset.steps).filter_map(|step| classify(preset, step))
}

fn classify(preset: &FacePreset, step: u32) -> Option<TickMark> {
    let kind = if preset.major_every > 0 && step % preset.major_every == 0 {
        TickKind::Major
    } else if preset.half_every > 0 && step % preset.half_every == 0 {
        TickKind::HalfMajor
    } else if preset.minute_every > 0 && step % preset.minute_every == 0 {
        TickKind::Minor
    } else {
        return None;
    };

    let numeral = match kind {
        TickKind::Major => numeral_for(preset, step),
        _ => None,
    };

    Some(TickMark {
        step,
        turns: step as f32 / preset.steps as f32,
        kind,
        numeral,
    })
}

/// Numeral for a major tick position.
///
/// Even hour positions carry the hour number (twelve at the top); odd hour
/// positions carry the minute number that shares the angle, so the two
/// numeral rings interleave without ever colliding.
fn numeral_for(preset: &FacePreset, step: u32) -> Option<Numeral> {
    let majors = preset.steps / preset.major_every;
    let index = step / preset.major_every;

    if index % 2 == 0 {
        if !preset.hour_numerals {
            return None;
        }
        let hour = if index == 0 { 12 } else { index * 12 / majors };
        Some(Numeral::Hour(hour as u8))
    } else {
        if !preset.minute_numerals {
            return None;
        }
        Some(Numeral::Minute((index * 60 / majors) as u8))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::presets::{DOUBLE_RING, HOURS_ONLY, MINIMAL};

    const CENTER: Point = Point::new(90, 90);

    #[test]
    fn test_polar_angle_zero_is_straight_up() {
        assert_eq!(polar_to_cartesian(CENTER, 86, 0.0), Point::new(90, 4));
    }

    #[test]
    fn test_polar_zero_radius_degenerates_to_center() {
        for step in 0..720 {
            let turns = step as f32 / 720.0;
            assert_eq!(polar_to_cartesian(CENTER, 0, turns), CENTER);
        }
    }

    #[test]
    fn test_polar_quarter_turn_landmarks() {
        // 3, 6 and 9 o'clock from the top, radius 70
        assert_eq!(polar_to_cartesian(CENTER, 70, 0.25), Point::new(160, 90));
        assert_eq!(polar_to_cartesian(CENTER, 70, 0.5), Point::new(90, 160));
        assert_eq!(polar_to_cartesian(CENTER, 70, 0.75), Point::new(20, 90));
    }

    #[test]
    fn test_polar_distinct_points_per_minute() {
        let points: HashSet<Point> = (0..60)
            .map(|m| polar_to_cartesian(CENTER, 70, m as f32 / 60.0))
            .collect();
        assert_eq!(points.len(), 60);
    }

    #[test]
    fn test_geometry_round_180() {
        let g = FaceGeometry::compute(Size::new(180, 180), DisplayShape::Round, &DOUBLE_RING);
        assert_eq!(g.center, Point::new(90, 90));
        assert_eq!(g.outer, 86);
        assert_eq!(g.label_box, 30);
        assert_eq!(g.minute_tick, 66);
        assert_eq!(g.hour_tick, 26);
        assert_eq!(g.sweep, 172);
    }

    #[test]
    fn test_geometry_rectangular_144x168() {
        let g = FaceGeometry::compute(Size::new(144, 168), DisplayShape::Rectangular, &DOUBLE_RING);
        assert_eq!(g.center, Point::new(72, 84));
        assert_eq!(g.outer, 70);
    }

    #[test]
    fn test_geometry_radius_ordering() {
        for (w, h) in [(180, 180), (144, 168), (64, 64), (320, 240)] {
            for shape in [DisplayShape::Round, DisplayShape::Rectangular] {
                for preset in [&DOUBLE_RING, &HOURS_ONLY, &MINIMAL] {
                    let g = FaceGeometry::compute(Size::new(w, h), shape, preset);
                    assert!(g.hour_tick <= g.minute_tick, "{w}x{h} {shape:?}");
                    assert!(g.minute_tick <= g.outer, "{w}x{h} {shape:?}");
                    assert!(g.half_dot >= 0 && g.minute_hand >= 0 && g.hour_hand >= 0);
                }
            }
        }
    }

    #[test]
    fn test_geometry_degenerate_bounds() {
        let g = FaceGeometry::compute(Size::new(6, 6), DisplayShape::Round, &DOUBLE_RING);
        assert_eq!(g.outer, 0);
        assert_eq!(g.minute_tick, 0);
        assert_eq!(g.hour_tick, 0);
        assert_eq!(g.minute_hand, 0);
        assert_eq!(g.hour_hand, 0);
    }

    #[test]
    fn test_reading_three_oclock() {
        let r = ClockReading::new(3, 0);
        assert_eq!(r.hour_turns, 0.25);
        assert_eq!(r.minute_turns, 0.0);
    }

    #[test]
    fn test_reading_half_past_midnight() {
        let r = ClockReading::new(0, 30);
        assert_eq!(r.hour_turns, 30.0 / 720.0);
        assert_eq!(r.minute_turns, 0.5);
    }

    #[test]
    fn test_reading_noon_and_midnight_wrap_to_top() {
        assert_eq!(ClockReading::new(0, 0).hour_turns, 0.0);
        assert_eq!(ClockReading::new(12, 0).hour_turns, 0.0);
        assert_eq!(ClockReading::new(12, 0).minute_turns, 0.0);
    }

    #[test]
    fn test_reading_angles_stay_in_unit_range() {
        for hour in 0..24u8 {
            for minute in 0..60u8 {
                let r = ClockReading::new(hour, minute);
                assert!((0.0..1.0).contains(&r.hour_turns), "{hour}:{minute}");
                assert!((0.0..1.0).contains(&r.minute_turns), "{hour}:{minute}");
            }
        }
    }

    #[test]
    fn test_tick_classification_counts() {
        let mut major = 0;
        let mut half = 0;
        let mut minor = 0;
        for tick in generate_ticks(&DOUBLE_RING) {
            match tick.kind {
                TickKind::Major => major += 1,
                TickKind::HalfMajor => half += 1,
                TickKind::Minor => minor += 1,
            }
        }
        assert_eq!(major, 12);
        assert_eq!(half, 12);
        assert_eq!(minor, 48);
    }

    #[test]
    fn test_major_ticks_at_hour_steps() {
        let majors: Vec<u32> = generate_ticks(&DOUBLE_RING)
            .filter(|t| t.kind == TickKind::Major)
            .map(|t| t.step)
            .collect();
        let expected: Vec<u32> = (0..12).map(|h| h * 60).collect();
        assert_eq!(majors, expected);
    }

    #[test]
    fn test_ticks_in_increasing_step_order() {
        let mut prev = None;
        for tick in generate_ticks(&DOUBLE_RING) {
            if let Some(p) = prev {
                assert!(tick.step > p);
            }
            prev = Some(tick.step);
        }
    }

    #[test]
    fn test_numerals_interleave_hours_and_minutes() {
        let mut hours = Vec::new();
        let mut minutes = Vec::new();
        for tick in generate_ticks(&DOUBLE_RING) {
            match tick.numeral {
                Some(Numeral::Hour(h)) => hours.push(h),
                Some(Numeral::Minute(m)) => minutes.push(m),
                None => {}
            }
        }
        hours.sort_unstable();
        assert_eq!(hours, [2, 4, 6, 8, 10, 12]);
        assert_eq!(minutes, [5, 15, 25, 35, 45, 55]);
    }

    #[test]
    fn test_numeral_flags_suppress_labels() {
        assert!(
            generate_ticks(&HOURS_ONLY)
                .all(|t| !matches!(t.numeral, Some(Numeral::Minute(_))))
        );
        assert!(generate_ticks(&MINIMAL).all(|t| t.numeral.is_none()));
    }

    #[test]
    fn test_disabled_ring_yields_no_minors() {
        assert!(generate_ticks(&MINIMAL).all(|t| t.kind != TickKind::Minor));
    }
}
