// Opacity Token System

pub const OPACITY_NONE: &str = "0";
pub const OPACITY_FAINT: &str = "0.1";
pub const OPACITY_HALF: &str = "0.5";
pub const OPACITY_DISABLED: &str = "0.5";
pub const OPACITY_OPAQUE: &str = "1";
