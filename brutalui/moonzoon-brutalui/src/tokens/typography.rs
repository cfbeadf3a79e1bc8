// Typography Token System

use zoon::*;

pub const FONT_FAMILY_SANS: &str = "'Space Grotesk', 'Inter', 'system-ui', sans-serif";
pub const FONT_FAMILY_MONO: &str = "'JetBrains Mono', 'Space Mono', 'Menlo', 'Consolas', monospace";

pub const FONT_SIZE_10: u32 = 10;
pub const FONT_SIZE_12: u32 = 12;
pub const FONT_SIZE_14: u32 = 14;
pub const FONT_SIZE_16: u32 = 16;
pub const FONT_SIZE_18: u32 = 18;
pub const FONT_SIZE_20: u32 = 20;
pub const FONT_SIZE_24: u32 = 24;
pub const FONT_SIZE_30: u32 = 30;
pub const FONT_SIZE_36: u32 = 36;
pub const FONT_SIZE_48: u32 = 48;
pub const FONT_SIZE_64: u32 = 64;

pub const FONT_WEIGHT_4: u32 = 400;
pub const FONT_WEIGHT_5: u32 = 500;
pub const FONT_WEIGHT_7: u32 = 700;
pub const FONT_WEIGHT_9: u32 = 900;

// Letter spacing in em, brutalist labels are wide and uppercase
pub const LETTER_SPACING_TIGHT: f32 = -0.02;
pub const LETTER_SPACING_WIDER: f32 = 0.05;
pub const LETTER_SPACING_WIDE: f32 = 0.1;

pub fn font_mono() -> impl Style<'static> {
    Font::new().family([FontFamily::new(FONT_FAMILY_MONO)])
}

pub fn font_sans() -> impl Style<'static> {
    Font::new().family([FontFamily::new(FONT_FAMILY_SANS)])
}
