// Section Component
// Page band with size presets and decorative overlays

use crate::tokens::*;
use zoon::*;

const GRID_CELL_PX: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
    /// Viewport tall, no padding.
    Full,
}

impl SectionSize {
    /// (padding y, padding x)
    pub fn padding(self) -> (u32, u32) {
        match self {
            SectionSize::Small => (SPACING_32, SPACING_16),
            SectionSize::Medium => (SPACING_64, SPACING_24),
            SectionSize::Large => (SPACING_96, SPACING_32),
            SectionSize::ExtraLarge => (SPACING_128, SPACING_48),
            SectionSize::Full => (0, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlay {
    Scanlines,
    Vignette,
}

impl Overlay {
    fn background_image(self) -> &'static str {
        match self {
            Overlay::Scanlines => {
                "repeating-linear-gradient(0deg, rgba(0, 0, 0, 0.15) 0px, rgba(0, 0, 0, 0.15) 1px, transparent 1px, transparent 3px)"
            }
            Overlay::Vignette => "radial-gradient(ellipse at center, transparent 50%, rgba(0, 0, 0, 0.7) 100%)",
        }
    }
}

pub fn grid_pattern_image() -> String {
    format!(
        "linear-gradient({COLOR_LINE} 1px, transparent 1px), linear-gradient(90deg, {COLOR_LINE} 1px, transparent 1px)"
    )
}

pub struct SectionBuilder {
    size: SectionSize,
    grid_pattern: bool,
    overlays: Vec<Overlay>,
    id: Option<String>,
    items: Vec<RawElOrText>,
}

impl SectionBuilder {
    pub fn new() -> Self {
        Self {
            size: SectionSize::default(),
            grid_pattern: false,
            overlays: Vec::new(),
            id: None,
            items: Vec::new(),
        }
    }

    pub fn size(mut self, size: SectionSize) -> Self {
        self.size = size;
        self
    }

    pub fn grid_pattern(mut self) -> Self {
        self.grid_pattern = true;
        self
    }

    pub fn scanlines(mut self) -> Self {
        self.overlays.push(Overlay::Scanlines);
        self
    }

    pub fn vignette(mut self) -> Self {
        self.overlays.push(Overlay::Vignette);
        self
    }

    /// Anchor target for in-page navigation.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn item(mut self, item: impl Element) -> Self {
        self.items.push(item.unify());
        self
    }

    pub fn build(self) -> impl Element {
        let (padding_y, padding_x) = self.size.padding();
        let mut section = RawHtmlEl::new("section")
            .style("position", "relative")
            .style("box-sizing", "border-box")
            .style("width", "100%")
            .style("padding", &format!("{padding_y}px {padding_x}px"));
        if self.size == SectionSize::Full {
            section = section.style("min-height", "100vh");
        }
        if self.grid_pattern {
            section = section
                .style("background-image", &grid_pattern_image())
                .style("background-size", &format!("{GRID_CELL_PX}px {GRID_CELL_PX}px"));
        }
        if let Some(id) = &self.id {
            section = section.attr("id", id);
        }

        section
            .child(
                Column::new()
                    .s(Width::fill().max(CONTENT_MAX_WIDTH))
                    .s(Align::new().center_x())
                    .update_raw_el(|raw_el| raw_el.style("position", "relative").style("z-index", "1"))
                    .items(self.items),
            )
            .children(self.overlays.into_iter().map(|overlay| {
                El::new().update_raw_el(move |raw_el| {
                    raw_el
                        .style("position", "absolute")
                        .style("inset", "0")
                        .style("pointer-events", "none")
                        .style("z-index", "2")
                        .style("background-image", overlay.background_image())
                })
            }))
    }
}

impl Default for SectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn section() -> SectionBuilder {
    SectionBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_presets_pad_vertically_first() {
        assert_eq!(SectionSize::Small.padding(), (32, 16));
        assert_eq!(SectionSize::default().padding(), (64, 24));
        assert_eq!(SectionSize::ExtraLarge.padding(), (128, 48));
        assert_eq!(SectionSize::Full.padding(), (0, 0));
    }

    #[test]
    fn overlays_stack_in_call_order() {
        let section = section().vignette().scanlines();
        assert_eq!(section.overlays, vec![Overlay::Vignette, Overlay::Scanlines]);
    }

    #[test]
    fn grid_pattern_uses_line_color() {
        assert!(grid_pattern_image().contains(COLOR_LINE));
    }
}
