// Focus Ring Token System

use super::color::COLOR_ACID;

pub const FOCUS_RING_WIDTH: u32 = 2;
pub const FOCUS_RING_OFFSET: u32 = 2;
pub const FOCUS_RING_COLOR: &str = COLOR_ACID;
pub const FOCUS_RING_SHADOW: &str = "0 0 0 2px #ccff00";
