// Preloader Component
// Ring with a spinning arc and a pulsing core

use crate::tokens::*;
use zoon::*;

const BOX_PX: u32 = 48;
const ARC_INSET_PX: u32 = 4;
const DOT_INSET_PX: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreloaderSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PreloaderSize {
    pub fn scale(self) -> f64 {
        match self {
            PreloaderSize::Small => 0.75,
            PreloaderSize::Medium => 1.,
            PreloaderSize::Large => 1.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreloaderVariant {
    #[default]
    Acid,
    Electric,
    White,
}

impl PreloaderVariant {
    pub fn color(self) -> &'static str {
        match self {
            PreloaderVariant::Acid => COLOR_ACID,
            PreloaderVariant::Electric => COLOR_ELECTRIC,
            PreloaderVariant::White => COLOR_WHITE,
        }
    }
}

/// Opacity of a pulse at phase `factor`: full at the ends, half in the middle.
pub fn pulse_opacity(factor: f64) -> f64 {
    0.5 + 0.5 * (2. * factor.rem_euclid(1.) - 1.).abs()
}

pub struct PreloaderBuilder {
    size: PreloaderSize,
    variant: PreloaderVariant,
    label: Option<String>,
}

impl PreloaderBuilder {
    pub fn new() -> Self {
        Self {
            size: PreloaderSize::default(),
            variant: PreloaderVariant::default(),
            label: Some("Loading...".to_owned()),
        }
    }

    pub fn size(mut self, size: PreloaderSize) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: PreloaderVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn without_label(mut self) -> Self {
        self.label = None;
        self
    }

    pub fn build(self) -> impl Element {
        let spin = create_spinner(Duration::milliseconds(800));
        let pulse = create_spinner(Duration::seconds(2));
        let scale = self.size.scale();
        let color = self.variant.color();

        let label = self.label.map(|label| {
            El::new()
                .s(font_mono())
                .s(Font::new().size(FONT_SIZE_12))
                .update_raw_el(|raw_el| {
                    raw_el
                        .style("text-transform", "uppercase")
                        .style("letter-spacing", &format!("{LETTER_SPACING_WIDE}em"))
                        .style_signal("opacity", pulse.signal().map(pulse_opacity))
                })
                .child(Text::new(label))
        });

        Column::new()
            .s(Gap::new().y(SPACING_12))
            .s(Align::new().center_x())
            .s(Font::new().color(color))
            .update_raw_el(move |raw_el| {
                raw_el
                    .attr("role", "status")
                    .attr("aria-live", "polite")
                    .style("transform", &format!("scale({scale})"))
            })
            .item(
                Stack::new()
                    .s(Width::exact(BOX_PX))
                    .s(Height::exact(BOX_PX))
                    .s(Align::new().center_x())
                    .layer(circle(BOX_PX, |raw_el| {
                        raw_el
                            .style("border", &format!("{BORDER_WIDTH_2}px solid currentColor"))
                            .style("opacity", "0.2")
                    }))
                    .layer(circle(BOX_PX - 2 * ARC_INSET_PX, move |raw_el| {
                        raw_el
                            .style("border", &format!("{BORDER_WIDTH_2}px solid currentColor"))
                            .style("border-top-color", "transparent")
                            .style_signal(
                                "transform",
                                spin.signal().map(|factor| format!("rotate({}deg)", factor * 360.)),
                            )
                    }))
                    .layer(circle(BOX_PX - 2 * DOT_INSET_PX, move |raw_el| {
                        raw_el
                            .style("background-color", color)
                            .style_signal("opacity", pulse.signal().map(pulse_opacity))
                    })),
            )
            .item(label)
    }
}

impl Default for PreloaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn circle(
    diameter: u32,
    paint: impl FnOnce(RawHtmlEl<web_sys::HtmlElement>) -> RawHtmlEl<web_sys::HtmlElement>,
) -> impl Element {
    El::new()
        .s(Width::exact(diameter))
        .s(Height::exact(diameter))
        .s(Align::center())
        .update_raw_el(|raw_el| paint(raw_el.style("box-sizing", "border-box").style("border-radius", "50%")))
}

pub fn preloader() -> PreloaderBuilder {
    PreloaderBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_dims_to_half_mid_cycle() {
        assert_eq!(pulse_opacity(0.), 1.);
        assert_eq!(pulse_opacity(0.5), 0.5);
        assert_eq!(pulse_opacity(0.75), 0.75);
    }

    #[test]
    fn sizes_scale_the_box() {
        assert_eq!(PreloaderSize::Small.scale(), 0.75);
        assert_eq!(PreloaderSize::default().scale(), 1.);
        assert_eq!(PreloaderSize::Large.scale(), 1.25);
    }

    #[test]
    fn default_preloader_is_acid_and_labelled() {
        let builder = preloader();
        assert_eq!(builder.variant.color(), COLOR_ACID);
        assert_eq!(builder.label.as_deref(), Some("Loading..."));
    }
}
