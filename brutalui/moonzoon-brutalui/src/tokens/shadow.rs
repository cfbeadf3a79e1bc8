// Shadow Token System
// Hard offset shadows without blur

pub const SHADOW_BRUTAL_SM: &str = "2px 2px 0 0";
pub const SHADOW_BRUTAL: &str = "4px 4px 0 0";
pub const SHADOW_BRUTAL_LG: &str = "8px 8px 0 0";

/// Full `box-shadow` value for a hard shadow of `size` in `color`.
pub fn brutal_shadow(size: &str, color: &str) -> String {
    format!("{size} {color}")
}

/// Layered glow, as used by the scroll progress bar.
pub fn glow_shadow(color: &str) -> String {
    format!("0 0 10px {color}, 0 0 20px {color}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_is_two_layers_of_the_same_color() {
        assert_eq!(glow_shadow("#ccff00"), "0 0 10px #ccff00, 0 0 20px #ccff00");
    }

    #[test]
    fn brutal_shadow_appends_color() {
        assert_eq!(brutal_shadow(SHADOW_BRUTAL, "#000"), "4px 4px 0 0 #000");
    }
}
