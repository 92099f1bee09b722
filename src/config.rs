//! Display and timing configuration.
//!
//! Everything the host environment decides about the target hardware lives
//! here as explicit values: display dimensions, shape, color capability,
//! and the redraw cadence. Rendering code receives these through function
//! parameters rather than reading ambient globals, so alternate targets
//! only have to change this module.

use std::time::Duration;

use crate::theme::ThemeField;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (round 180x180 panel).
pub const SCREEN_WIDTH: u32 = 180;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 180;

/// Physical outline of the display glass.
///
/// Round displays reserve a larger edge inset so the outermost ring stays
/// inside the visible circle; rectangular ones only need clearance for the
/// bezel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayShape {
    Round,
    Rectangular,
}

impl DisplayShape {
    /// Edge inset in pixels reserved between the outer ring and the glass.
    pub const fn inset(self) -> i32 {
        match self {
            Self::Round => 4,
            Self::Rectangular => 2,
        }
    }
}

/// Color capability of the target panel.
///
/// Monochrome panels cannot rely on hue to separate numerals from the tick
/// lines crossing the label bands, so the renderer punches a
/// background-colored disc behind each numeral on them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayCapability {
    Color,
    Monochrome,
}

impl DisplayCapability {
    #[inline]
    pub const fn is_monochrome(self) -> bool {
        matches!(self, Self::Monochrome)
    }
}

/// Shape of the simulated panel.
pub const SHAPE: DisplayShape = DisplayShape::Round;

/// Color capability of the simulated panel.
pub const CAPABILITY: DisplayCapability = DisplayCapability::Color;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Redraw cadence: the face only changes once per minute.
pub const TICK_INTERVAL: Duration = Duration::from_secs(60);

/// Redraw cadence with the fast-forward transform enabled (one apparent
/// minute per real second).
pub const FAST_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Event-pump poll interval. The loop sleeps between polls; actual drawing
/// only happens when the dirty flag is set.
pub const POLL_INTERVAL: Duration = Duration::from_millis(20);

// =============================================================================
// Settings Persistence
// =============================================================================

/// Directory holding persisted settings records, one file per key.
pub const SETTINGS_DIR: &str = "dial-clock-settings";

// =============================================================================
// Sample Configuration Messages (keyboard-driven channel)
// =============================================================================

/// Full-palette message: restore the compiled-in color palette.
pub const PALETTE_CLASSIC: [(u32, i32); 6] = [
    (ThemeField::Background as u32, 0x000055),
    (ThemeField::MajorTick as u32, 0x5555AA),
    (ThemeField::MinorMinuteTick as u32, 0x5555AA),
    (ThemeField::MinorHourTick as u32, 0x5555AA),
    (ThemeField::Hour as u32, 0xAAFFFF),
    (ThemeField::Minute as u32, 0xFFAA55),
];

/// Full-palette message: near-black face with amber hands.
pub const PALETTE_EMBER: [(u32, i32); 6] = [
    (ThemeField::Background as u32, 0x000000),
    (ThemeField::MajorTick as u32, 0x555555),
    (ThemeField::MinorMinuteTick as u32, 0x2A2A2A),
    (ThemeField::MinorHourTick as u32, 0x555555),
    (ThemeField::Hour as u32, 0xFFFFAA),
    (ThemeField::Minute as u32, 0xFF5500),
];

/// Full-palette message: light face with dark hands.
pub const PALETTE_PAPER: [(u32, i32); 6] = [
    (ThemeField::Background as u32, 0xFFFFFF),
    (ThemeField::MajorTick as u32, 0x555555),
    (ThemeField::MinorMinuteTick as u32, 0xAAAAAA),
    (ThemeField::MinorHourTick as u32, 0x555555),
    (ThemeField::Hour as u32, 0x0000AA),
    (ThemeField::Minute as u32, 0xAA0000),
];
