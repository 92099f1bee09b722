//! Visual theme: the complete set of user-configurable colors and widths.
//!
//! A [`Theme`] always carries a valid value in every field. It starts from
//! compiled-in defaults chosen by display capability, may be overwritten
//! wholesale by a persisted record at startup, and afterwards changes only
//! through sparse [`ThemeUpdate`] messages arriving from the companion
//! configuration channel.
//!
//! # Persistence record
//!
//! The on-disk form is a fixed-field-order record of
//! [`THEME_RECORD_LEN`] bytes: six raw RGB565 words, little-endian, in
//! declaration order, followed by the two width bytes. There is no version
//! field; a record of any other length, or one carrying a zero stroke
//! width, is discarded and the current values stay in place.

use embedded_graphics::{
    pixelcolor::{Rgb565, Rgb888, raw::RawU16},
    prelude::IntoStorage,
};

use crate::colors::{APRICOT, BLACK, NAVY, PALE_CYAN, SLATE, WHITE};
use crate::config::DisplayCapability;

/// Size in bytes of the persisted theme record.
pub const THEME_RECORD_LEN: usize = 14;

/// Default stroke width of hour lines, in pixels.
pub const DEFAULT_MAJOR_TICK_WIDTH: u8 = 3;

/// Default stroke width of minute ticks, in pixels.
pub const DEFAULT_MINOR_TICK_WIDTH: u8 = 1;

/// Convert a 24-bit `0xRRGGBB` configuration value to the display format.
pub fn rgb565_from_hex(hex: u32) -> Rgb565 {
    Rgb565::from(Rgb888::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8))
}

// =============================================================================
// Theme
// =============================================================================

/// Every user-configurable visual attribute of the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Theme {
    pub background: Rgb565,
    pub major_tick: Rgb565,
    pub minor_minute_tick: Rgb565,
    pub minor_hour_tick: Rgb565,
    /// Hour hand and hour numerals.
    pub hour: Rgb565,
    /// Minute hand and minute numerals.
    pub minute: Rgb565,
    pub major_tick_width: u8,
    pub minor_tick_width: u8,
}

impl Theme {
    /// Compiled-in defaults for the given display capability.
    pub const fn defaults(capability: DisplayCapability) -> Self {
        match capability {
            DisplayCapability::Color => Self {
                background: NAVY,
                major_tick: SLATE,
                minor_minute_tick: SLATE,
                minor_hour_tick: SLATE,
                hour: PALE_CYAN,
                minute: APRICOT,
                major_tick_width: DEFAULT_MAJOR_TICK_WIDTH,
                minor_tick_width: DEFAULT_MINOR_TICK_WIDTH,
            },
            DisplayCapability::Monochrome => Self {
                background: BLACK,
                major_tick: WHITE,
                minor_minute_tick: WHITE,
                minor_hour_tick: WHITE,
                hour: WHITE,
                minute: WHITE,
                major_tick_width: DEFAULT_MAJOR_TICK_WIDTH,
                minor_tick_width: DEFAULT_MINOR_TICK_WIDTH,
            },
        }
    }

    /// Serialize to the fixed persistence record.
    pub fn encode(&self) -> [u8; THEME_RECORD_LEN] {
        let mut record = [0u8; THEME_RECORD_LEN];
        let colors = [
            self.background,
            self.major_tick,
            self.minor_minute_tick,
            self.minor_hour_tick,
            self.hour,
            self.minute,
        ];
        for (i, color) in colors.iter().enumerate() {
            record[i * 2..i * 2 + 2].copy_from_slice(&color.into_storage().to_le_bytes());
        }
        record[12] = self.major_tick_width;
        record[13] = self.minor_tick_width;
        record
    }

    /// Deserialize a persistence record.
    ///
    /// Returns `None` unless the record length matches exactly and both
    /// stroke widths are positive; callers keep their current theme in
    /// that case.
    pub fn decode(record: &[u8]) -> Option<Self> {
        if record.len() != THEME_RECORD_LEN {
            return None;
        }
        let color = |i: usize| {
            Rgb565::from(RawU16::new(u16::from_le_bytes([record[i * 2], record[i * 2 + 1]])))
        };
        let major_tick_width = record[12];
        let minor_tick_width = record[13];
        if major_tick_width == 0 || minor_tick_width == 0 {
            return None;
        }
        Some(Self {
            background: color(0),
            major_tick: color(1),
            minor_minute_tick: color(2),
            minor_hour_tick: color(3),
            hour: color(4),
            minute: color(5),
            major_tick_width,
            minor_tick_width,
        })
    }

    /// Apply a sparse update; fields absent from the update keep their
    /// current value. Returns whether anything actually changed.
    pub fn apply(&mut self, update: &ThemeUpdate) -> bool {
        let before = *self;
        if let Some(c) = update.background {
            self.background = c;
        }
        if let Some(c) = update.major_tick {
            self.major_tick = c;
        }
        if let Some(c) = update.minor_minute_tick {
            self.minor_minute_tick = c;
        }
        if let Some(c) = update.minor_hour_tick {
            self.minor_hour_tick = c;
        }
        if let Some(c) = update.hour {
            self.hour = c;
        }
        if let Some(c) = update.minute {
            self.minute = c;
        }
        if let Some(w) = update.major_tick_width {
            self.major_tick_width = w;
        }
        if let Some(w) = update.minor_tick_width {
            self.minor_tick_width = w;
        }
        *self != before
    }
}

// =============================================================================
// Configuration Messages
// =============================================================================

/// Field identifiers used by the inbound configuration channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum ThemeField {
    Background = 0,
    MajorTick = 1,
    MinorMinuteTick = 2,
    MinorHourTick = 3,
    Hour = 4,
    Minute = 5,
    MajorTickWidth = 6,
    MinorTickWidth = 7,
}

impl ThemeField {
    /// Decode a wire key. Unrecognized keys map to `None` and are ignored.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0 => Self::Background,
            1 => Self::MajorTick,
            2 => Self::MinorMinuteTick,
            3 => Self::MinorHourTick,
            4 => Self::Hour,
            5 => Self::Minute,
            6 => Self::MajorTickWidth,
            7 => Self::MinorTickWidth,
            _ => return None,
        })
    }
}

/// Sparse theme change: one message from the configuration channel.
///
/// Any subset of fields may be present. Color values arrive as 24-bit
/// `0xRRGGBB` integers, widths as small positive integers; a zero or
/// negative width is the no-render bug class and is dropped field-wise.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct ThemeUpdate {
    pub background: Option<Rgb565>,
    pub major_tick: Option<Rgb565>,
    pub minor_minute_tick: Option<Rgb565>,
    pub minor_hour_tick: Option<Rgb565>,
    pub hour: Option<Rgb565>,
    pub minute: Option<Rgb565>,
    pub major_tick_width: Option<u8>,
    pub minor_tick_width: Option<u8>,
}

impl ThemeUpdate {
    /// Fold one wire key/value pair into the update.
    pub fn set(&mut self, key: u32, value: i32) {
        let Some(field) = ThemeField::from_raw(key) else {
            return;
        };
        match field {
            ThemeField::Background => self.background = Some(rgb565_from_hex(value as u32)),
            ThemeField::MajorTick => self.major_tick = Some(rgb565_from_hex(value as u32)),
            ThemeField::MinorMinuteTick => {
                self.minor_minute_tick = Some(rgb565_from_hex(value as u32));
            }
            ThemeField::MinorHourTick => {
                self.minor_hour_tick = Some(rgb565_from_hex(value as u32));
            }
            ThemeField::Hour => self.hour = Some(rgb565_from_hex(value as u32)),
            ThemeField::Minute => self.minute = Some(rgb565_from_hex(value as u32)),
            ThemeField::MajorTickWidth => {
                if (1..=255).contains(&value) {
                    self.major_tick_width = Some(value as u8);
                }
            }
            ThemeField::MinorTickWidth => {
                if (1..=255).contains(&value) {
                    self.minor_tick_width = Some(value as u8);
                }
            }
        }
    }

    /// Build an update from a batch of wire pairs.
    pub fn from_pairs(pairs: &[(u32, i32)]) -> Self {
        let mut update = Self::default();
        for &(key, value) in pairs {
            update.set(key, value);
        }
        update
    }

    #[allow(dead_code)] // Only used in tests
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_differ_by_capability() {
        let color = Theme::defaults(DisplayCapability::Color);
        let mono = Theme::defaults(DisplayCapability::Monochrome);
        assert_ne!(color, mono);
        assert_eq!(mono.background, BLACK);
        assert_eq!(mono.hour, WHITE);
        assert_eq!(color.major_tick_width, DEFAULT_MAJOR_TICK_WIDTH);
    }

    #[test]
    fn test_record_round_trip() {
        let mut theme = Theme::defaults(DisplayCapability::Color);
        theme.minute = rgb565_from_hex(0xFF5500);
        theme.major_tick_width = 4;
        let record = theme.encode();
        assert_eq!(record.len(), THEME_RECORD_LEN);
        assert_eq!(Theme::decode(&record), Some(theme));
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let record = Theme::defaults(DisplayCapability::Color).encode();
        assert_eq!(Theme::decode(&record[..THEME_RECORD_LEN - 1]), None);
        let mut long = record.to_vec();
        long.push(0);
        assert_eq!(Theme::decode(&long), None);
        assert_eq!(Theme::decode(&[]), None);
    }

    #[test]
    fn test_decode_rejects_zero_width() {
        let mut record = Theme::defaults(DisplayCapability::Color).encode();
        record[12] = 0;
        assert_eq!(Theme::decode(&record), None);
    }

    #[test]
    fn test_sparse_update_touches_one_field() {
        let mut theme = Theme::defaults(DisplayCapability::Color);
        let reference = theme;
        let mut update = ThemeUpdate::default();
        update.set(ThemeField::Minute as u32, 0x00FF00);

        assert!(theme.apply(&update));
        assert_eq!(theme.minute, rgb565_from_hex(0x00FF00));
        assert_eq!(theme.background, reference.background);
        assert_eq!(theme.hour, reference.hour);
        assert_eq!(theme.major_tick_width, reference.major_tick_width);
    }

    #[test]
    fn test_apply_reports_no_change() {
        let mut theme = Theme::defaults(DisplayCapability::Color);
        assert!(!theme.apply(&ThemeUpdate::default()));
        let mut update = ThemeUpdate::default();
        update.set(ThemeField::MajorTickWidth as u32, i32::from(theme.major_tick_width));
        assert!(!theme.apply(&update));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let update = ThemeUpdate::from_pairs(&[(99, 0xFF0000), (1000, 2)]);
        assert!(update.is_empty());
    }

    #[test]
    fn test_zero_width_dropped_from_update() {
        let update = ThemeUpdate::from_pairs(&[
            (ThemeField::MajorTickWidth as u32, 0),
            (ThemeField::MinorTickWidth as u32, -3),
        ]);
        assert!(update.is_empty());
    }

    #[test]
    fn test_hex_conversion_reaches_display_primaries() {
        assert_eq!(rgb565_from_hex(0x000000), Rgb565::new(0, 0, 0));
        assert_eq!(rgb565_from_hex(0xFFFFFF), Rgb565::new(31, 63, 31));
        assert_eq!(rgb565_from_hex(0xFF0000), Rgb565::new(31, 0, 0));
    }
}
