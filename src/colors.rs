//! Color constants for the clock face.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to the small SPI displays the face targets, so
//! theme colors are stored pre-converted and written out without any
//! per-frame conversion. Colors arriving over the configuration channel
//! as 24-bit values are converted once on receipt (see
//! [`theme::rgb565_from_hex`](crate::theme::rgb565_from_hex)).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Monochrome default background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Monochrome default for ticks, numerals, hands.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Default Palette (color displays)
// =============================================================================

/// Deep navy background. RGB888 #000055.
pub const NAVY: Rgb565 = Rgb565::new(0, 0, 10);

/// Muted slate blue for tick marks. RGB888 #5555AA.
pub const SLATE: Rgb565 = Rgb565::new(10, 21, 21);

/// Pale cyan for the hour hand and hour numerals. RGB888 #AAFFFF.
pub const PALE_CYAN: Rgb565 = Rgb565::new(21, 63, 31);

/// Warm apricot for the minute hand and minute numerals. RGB888 #FFAA55.
pub const APRICOT: Rgb565 = Rgb565::new(31, 42, 10);
