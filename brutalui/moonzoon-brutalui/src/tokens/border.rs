// Border Token System
// Thick, square borders; no corner radius anywhere in the library

pub const BORDER_WIDTH_1: u32 = 1;
pub const BORDER_WIDTH_2: u32 = 2;
pub const BORDER_WIDTH_3: u32 = 3;
pub const BORDER_WIDTH_4: u32 = 4;

pub const BORDER_STYLE_SOLID: &str = "solid";
pub const BORDER_STYLE_DASHED: &str = "dashed";
