//! Pre-computed text styles and font selection for numerals.
//!
//! Alignment styles are `const` so no style object is constructed per
//! frame. Numeral colors come from the live theme, so the character style
//! itself is built at draw time from a font reference returned by
//! [`numeral_font`]; only the color varies, the font reference is shared.

use embedded_graphics::{
    mono_font::{
        MonoFont,
        ascii::{FONT_6X10, FONT_10X20},
    },
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

/// Centered text anchored at its visual middle. Numerals are placed by
/// their band anchor point, not a baseline.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Pick the largest mono font whose digits fit the label box.
///
/// The box side scales with the outer face radius (see
/// [`FaceGeometry`](crate::layout::FaceGeometry)), so a 180px round panel
/// gets the 24pt numerals while a 64px test target falls back to 6x10.
pub fn numeral_font(label_box: i32) -> &'static MonoFont<'static> {
    if label_box >= 30 {
        &PROFONT_24_POINT
    } else if label_box >= 20 {
        &PROFONT_18_POINT
    } else if label_box >= 13 {
        &FONT_10X20
    } else {
        &FONT_6X10
    }
}
