// Card Component
// Concrete panel with optional hover lift and acid accents

use crate::tokens::*;
use std::rc::Rc;
use zoon::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
    Outlined,
    Glitch,
}

impl CardVariant {
    fn background(self) -> &'static str {
        match self {
            CardVariant::Outlined => "transparent",
            _ => COLOR_CONCRETE,
        }
    }

    fn border_color(self) -> &'static str {
        match self {
            CardVariant::Outlined => COLOR_WHITE,
            CardVariant::Glitch => COLOR_ACID,
            CardVariant::Default | CardVariant::Elevated => COLOR_LINE,
        }
    }

    fn resting_shadow(self) -> Option<String> {
        (self == CardVariant::Elevated).then(|| brutal_shadow(SHADOW_BRUTAL, COLOR_VOID))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CardSize {
    pub fn padding(self) -> u32 {
        match self {
            CardSize::Small => SPACING_16,
            CardSize::Medium => SPACING_24,
            CardSize::Large => SPACING_32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardAccent {
    #[default]
    None,
    Top,
    Left,
    Corner,
}

/// Offset in px for the glitch jitter at animation phase `factor` (0..1).
pub fn glitch_offset(factor: f64) -> (i32, i32) {
    match (factor.rem_euclid(1.) * 5.) as u32 {
        0 => (0, 0),
        1 => (-2, 2),
        2 => (-2, -2),
        3 => (2, 2),
        _ => (2, -2),
    }
}

pub struct CardBuilder {
    variant: CardVariant,
    size: CardSize,
    hoverable: bool,
    accent: CardAccent,
    on_press: Option<Rc<dyn Fn()>>,
    items: Vec<RawElOrText>,
}

impl CardBuilder {
    pub fn new() -> Self {
        Self {
            variant: CardVariant::default(),
            size: CardSize::default(),
            hoverable: false,
            accent: CardAccent::default(),
            on_press: None,
            items: Vec::new(),
        }
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    pub fn hoverable(mut self) -> Self {
        self.hoverable = true;
        self
    }

    pub fn accent(mut self, accent: CardAccent) -> Self {
        self.accent = accent;
        self
    }

    /// Makes the whole card clickable.
    pub fn on_press(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_press = Some(Rc::new(handler));
        self
    }

    pub fn item(mut self, item: impl Element) -> Self {
        self.items.push(item.unify());
        self
    }

    pub fn build(self) -> impl Element {
        let variant = self.variant;
        let hoverable = self.hoverable;
        let clickable = self.on_press.is_some();
        let hovered = Mutable::new(false);
        let lifted = clone!((hovered) move || hovered.signal().map(move |hovered| hovered && hoverable));

        let card = Column::new()
            .s(Width::fill())
            .s(Padding::all(self.size.padding()))
            .s(Background::new().color(variant.background()))
            .s(transition_transform())
            .s(Borders::all_signal(lifted().map(move |lifted| {
                let color = if lifted { COLOR_ACID } else { variant.border_color() };
                Border::new().width(BORDER_WIDTH_2).color(color)
            })))
            .s(Transform::with_signal_self(
                lifted().map(|lifted| lifted.then(|| Transform::new().move_left(2).move_up(2))),
            ))
            .update_raw_el(move |raw_el| {
                let raw_el = raw_el
                    .style("position", "relative")
                    .style("box-sizing", "border-box")
                    .style_signal(
                        "box-shadow",
                        lifted().map(move |lifted| {
                            if lifted {
                                Some(brutal_shadow(SHADOW_BRUTAL, COLOR_ACID))
                            } else {
                                variant.resting_shadow()
                            }
                        }),
                    );
                let raw_el = if clickable {
                    raw_el.style("cursor", "pointer")
                } else {
                    raw_el
                };
                if variant == CardVariant::Glitch {
                    let oscillator = create_spinner(Duration::milliseconds(300));
                    raw_el.style_signal(
                        "translate",
                        oscillator.signal().map(|factor| {
                            let (x, y) = glitch_offset(factor);
                            format!("{x}px {y}px")
                        }),
                    )
                } else {
                    raw_el
                }
            })
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .item(accent_mark(self.accent))
            .items(self.items);

        match self.on_press {
            Some(handler) => card.on_click(move || handler()).unify(),
            None => card.unify(),
        }
    }
}

impl Default for CardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn accent_mark(accent: CardAccent) -> Option<impl Element> {
    let (width, height, clip) = match accent {
        CardAccent::None => return None,
        CardAccent::Top => ("100%", "4px", None),
        CardAccent::Left => ("4px", "100%", None),
        CardAccent::Corner => ("32px", "32px", Some("polygon(0 0, 100% 0, 100% 100%)")),
    };
    let right_anchored = accent == CardAccent::Corner;
    Some(
        El::new()
            .s(Background::new().color(COLOR_ACID))
            .update_raw_el(move |raw_el| {
                let raw_el = raw_el
                    .style("position", "absolute")
                    .style("top", "0")
                    .style(if right_anchored { "right" } else { "left" }, "0")
                    .style("width", width)
                    .style("height", height)
                    .style("pointer-events", "none");
                match clip {
                    Some(clip) => raw_el.style("clip-path", clip),
                    None => raw_el,
                }
            }),
    )
}

pub fn card() -> CardBuilder {
    CardBuilder::new()
}

pub fn card_title(title: impl Into<String>) -> impl Element {
    RawHtmlEl::new("h3")
        .style("margin", "0")
        .style("font-family", FONT_FAMILY_MONO)
        .style("font-size", &format!("{FONT_SIZE_16}px"))
        .style("font-weight", &FONT_WEIGHT_7.to_string())
        .style("text-transform", "uppercase")
        .style("letter-spacing", &format!("{LETTER_SPACING_WIDER}em"))
        .style("color", COLOR_WHITE)
        .child(Text::new(title.into()))
}

pub fn card_description(description: impl Into<String>) -> impl Element {
    Paragraph::new()
        .s(Font::new().size(FONT_SIZE_14).color(COLOR_MUTED))
        .s(Padding::new().top(SPACING_4))
        .content(description.into())
}

/// Title and description above a hairline.
pub fn card_header(title: impl Into<String>, description: Option<String>) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::new().bottom(SPACING_16))
        .s(Borders::new().bottom(Border::new().width(BORDER_WIDTH_1).color(COLOR_LINE)))
        .update_raw_el(|raw_el| raw_el.style("margin-bottom", &format!("{SPACING_16}px")))
        .item(card_title(title))
        .item(description.map(|description| card_description(description)))
}

pub fn card_content(content: impl Element) -> impl Element {
    El::new().s(Width::fill()).child(content)
}

pub fn card_footer(items: Vec<RawElOrText>) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_8))
        .s(Padding::new().top(SPACING_16))
        .s(Borders::new().top(Border::new().width(BORDER_WIDTH_1).color(COLOR_LINE)))
        .update_raw_el(|raw_el| raw_el.style("margin-top", &format!("{SPACING_16}px")))
        .items(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glitch_cycles_through_five_keyframes() {
        assert_eq!(glitch_offset(0.0), (0, 0));
        assert_eq!(glitch_offset(0.25), (-2, 2));
        assert_eq!(glitch_offset(0.5), (-2, -2));
        assert_eq!(glitch_offset(0.7), (2, 2));
        assert_eq!(glitch_offset(0.99), (2, -2));
        assert_eq!(glitch_offset(1.0), (0, 0));
    }

    #[test]
    fn outlined_card_is_transparent_with_white_border() {
        assert_eq!(CardVariant::Outlined.background(), "transparent");
        assert_eq!(CardVariant::Outlined.border_color(), COLOR_WHITE);
        assert!(CardVariant::Default.resting_shadow().is_none());
        assert!(CardVariant::Elevated.resting_shadow().is_some());
    }

    #[test]
    fn sizes_map_to_padding() {
        assert_eq!(CardSize::Small.padding(), 16);
        assert_eq!(CardSize::default().padding(), 24);
        assert_eq!(CardSize::Large.padding(), 32);
    }
}
