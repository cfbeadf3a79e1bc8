// Color Token System
// Static dark palette, the library has no light theme

// Backgrounds, darkest first
pub const COLOR_VOID: &str = "#0a0a0a";
pub const COLOR_DARK: &str = "#111111";
pub const COLOR_SURFACE: &str = "#1a1a1a";
pub const COLOR_CONCRETE: &str = "#222222";

// Lines and text
pub const COLOR_LINE: &str = "#3a3a3a";
pub const COLOR_DIM: &str = "#666666";
pub const COLOR_MUTED: &str = "#a0a0a0";
pub const COLOR_WHITE: &str = "#ffffff";

// Brand
pub const COLOR_PRIMARY: &str = "#ff0066";
pub const COLOR_SECONDARY: &str = "#00d4ff";
pub const COLOR_ELECTRIC: &str = COLOR_SECONDARY;

// Accents
pub const COLOR_ACID: &str = "#ccff00";
pub const COLOR_NEON: &str = "#ff00ff";
pub const COLOR_AMBER: &str = "#ffaa00";

// Semantic
pub const COLOR_SUCCESS: &str = "#00ff88";
pub const COLOR_WARNING: &str = "#ffcc00";
pub const COLOR_ERROR: &str = "#ff3366";
pub const COLOR_INFO: &str = "#00ccff";

/// Named palette entry, used by the color palette showcase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swatch {
    pub name: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwatchGroup {
    pub title: &'static str,
    pub swatches: &'static [Swatch],
}

pub const PALETTE: [SwatchGroup; 4] = [
    SwatchGroup {
        title: "Backgrounds",
        swatches: &[
            Swatch { name: "Void", value: COLOR_VOID },
            Swatch { name: "Dark", value: COLOR_DARK },
            Swatch { name: "Surface", value: COLOR_SURFACE },
            Swatch { name: "Concrete", value: COLOR_CONCRETE },
        ],
    },
    SwatchGroup {
        title: "Primary / Secondary",
        swatches: &[
            Swatch { name: "Primary", value: COLOR_PRIMARY },
            Swatch { name: "Secondary", value: COLOR_SECONDARY },
        ],
    },
    SwatchGroup {
        title: "Accents",
        swatches: &[
            Swatch { name: "Acid", value: COLOR_ACID },
            Swatch { name: "Neon", value: COLOR_NEON },
            Swatch { name: "Amber", value: COLOR_AMBER },
        ],
    },
    SwatchGroup {
        title: "Semantic",
        swatches: &[
            Swatch { name: "Success", value: COLOR_SUCCESS },
            Swatch { name: "Warning", value: COLOR_WARNING },
            Swatch { name: "Error", value: COLOR_ERROR },
            Swatch { name: "Info", value: COLOR_INFO },
        ],
    },
];

/// Ink color that stays readable on top of `background`.
pub fn contrast_text(background: &str) -> &'static str {
    match background {
        COLOR_VOID | COLOR_DARK | COLOR_SURFACE | COLOR_CONCRETE | COLOR_LINE | COLOR_PRIMARY
        | COLOR_NEON | COLOR_ERROR => COLOR_WHITE,
        _ => COLOR_VOID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_names_are_unique() {
        let mut names: Vec<_> = PALETTE
            .iter()
            .flat_map(|group| group.swatches.iter().map(|swatch| swatch.name))
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn contrast_text_picks_dark_ink_on_bright_colors() {
        assert_eq!(contrast_text(COLOR_ACID), COLOR_VOID);
        assert_eq!(contrast_text(COLOR_SECONDARY), COLOR_VOID);
        assert_eq!(contrast_text(COLOR_PRIMARY), COLOR_WHITE);
        assert_eq!(contrast_text(COLOR_VOID), COLOR_WHITE);
    }
}
