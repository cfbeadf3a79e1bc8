// Button Component
// Hard-edged variants with a brutal hover offset

use crate::components::icon::*;
use crate::tokens::*;
use std::pin::Pin;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// (padding x, padding y, font size)
    pub fn metrics(self) -> (u32, u32, u32) {
        match self {
            ButtonSize::Small => (SPACING_12, SPACING_6, FONT_SIZE_12),
            ButtonSize::Medium => (SPACING_20, SPACING_8, FONT_SIZE_14),
            ButtonSize::Large => (SPACING_32, SPACING_12, FONT_SIZE_16),
        }
    }

    fn icon_size(self) -> IconSize {
        match self {
            ButtonSize::Large => IconSize::Medium,
            _ => IconSize::Small,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonColors {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

impl ButtonVariant {
    pub fn colors(self, hovered: bool) -> ButtonColors {
        match (self, hovered) {
            (ButtonVariant::Primary, false) => ButtonColors {
                background: COLOR_ACID,
                text: COLOR_VOID,
                border: COLOR_ACID,
            },
            (ButtonVariant::Secondary, false) => ButtonColors {
                background: COLOR_ELECTRIC,
                text: COLOR_VOID,
                border: COLOR_ELECTRIC,
            },
            (ButtonVariant::Primary | ButtonVariant::Secondary, true) => ButtonColors {
                background: COLOR_WHITE,
                text: COLOR_VOID,
                border: COLOR_WHITE,
            },
            (ButtonVariant::Outline, false) => ButtonColors {
                background: "transparent",
                text: COLOR_WHITE,
                border: COLOR_WHITE,
            },
            (ButtonVariant::Outline, true) => ButtonColors {
                background: COLOR_WHITE,
                text: COLOR_VOID,
                border: COLOR_WHITE,
            },
            (ButtonVariant::Ghost, false) => ButtonColors {
                background: "transparent",
                text: COLOR_WHITE,
                border: "transparent",
            },
            (ButtonVariant::Ghost, true) => ButtonColors {
                background: "rgba(255, 255, 255, 0.1)",
                text: COLOR_WHITE,
                border: "transparent",
            },
        }
    }

    /// Ghost buttons stay flat on hover.
    fn lifts_on_hover(self) -> bool {
        self != ButtonVariant::Ghost
    }
}

pub struct ButtonBuilder {
    label: Option<String>,
    label_signal: Option<Pin<Box<dyn Signal<Item = String>>>>,
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    disabled: bool,
    disabled_signal: Option<Pin<Box<dyn Signal<Item = bool>>>>,
    loading: bool,
    start_icon: Option<IconName>,
    end_icon: Option<IconName>,
    aria_label: Option<String>,
    on_press: Option<Box<dyn Fn()>>,
}

impl ButtonBuilder {
    pub fn new() -> Self {
        Self {
            label: None,
            label_signal: None,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            full_width: false,
            disabled: false,
            disabled_signal: None,
            loading: false,
            start_icon: None,
            end_icon: None,
            aria_label: None,
            on_press: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label_signal(mut self, label: impl Signal<Item = String> + 'static) -> Self {
        self.label_signal = Some(label.boxed_local());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Overrides `disabled` once the signal yields.
    pub fn disabled_signal(mut self, disabled: impl Signal<Item = bool> + 'static) -> Self {
        self.disabled_signal = Some(disabled.boxed_local());
        self
    }

    /// A loading button shows a spinner and ignores presses.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn start_icon(mut self, icon: IconName) -> Self {
        self.start_icon = Some(icon);
        self
    }

    pub fn end_icon(mut self, icon: IconName) -> Self {
        self.end_icon = Some(icon);
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn build(mut self) -> impl Element {
        let variant = self.variant;
        let loading = self.loading;
        let (padding_x, padding_y, font_size) = self.size.metrics();

        let hovered = Mutable::new(false);
        let disabled = Mutable::new(self.disabled || loading);
        let disabled_sync = self.disabled_signal.take().map(|signal| {
            Task::start_droppable({
                let disabled = disabled.clone();
                async move {
                    signal
                        .for_each_sync(move |is_disabled| disabled.set_neq(is_disabled || loading))
                        .await
                }
            })
        });

        let active_hover = clone!((hovered, disabled) move || active_hover_signal(&hovered, &disabled));
        let full_width = self.full_width;

        let content = self.create_button_content();
        let aria_label = self.aria_label.take();
        let on_press = self.on_press.take();

        Button::new()
            .s(Padding::new().x(padding_x).y(padding_y))
            .s(font_mono())
            .s(Font::new().size(font_size).weight(FontWeight::Bold).no_wrap())
            .s(transition_colors())
            .s(transition_transform())
            .s(Background::new().color_signal(
                active_hover().map(move |hovered| variant.colors(hovered).background),
            ))
            .s(Font::new().color_signal(
                active_hover().map(move |hovered| variant.colors(hovered).text),
            ))
            .s(Borders::all_signal(active_hover().map(move |hovered| {
                Border::new()
                    .width(BORDER_WIDTH_2)
                    .color(variant.colors(hovered).border)
            })))
            .s(Transform::with_signal_self(active_hover().map(move |hovered| {
                (hovered && variant.lifts_on_hover())
                    .then(|| Transform::new().move_left(2).move_up(2))
            })))
            .update_raw_el(clone!((disabled) move |raw_el| {
                let raw_el = raw_el
                    .style("text-transform", "uppercase")
                    .style("letter-spacing", &format!("{LETTER_SPACING_WIDE}em"))
                    .style("justify-content", "center")
                    .style("width", if full_width { "100%" } else { "auto" })
                    .style_signal(
                        "box-shadow",
                        active_hover().map(move |hovered| {
                            (hovered && variant.lifts_on_hover())
                                .then(|| brutal_shadow(SHADOW_BRUTAL, COLOR_ACID))
                        }),
                    )
                    .style_signal(
                        "opacity",
                        disabled
                            .signal()
                            .map(|d| if d { OPACITY_DISABLED } else { OPACITY_OPAQUE }),
                    )
                    .style_signal(
                        "cursor",
                        disabled
                            .signal()
                            .map(|d| if d { "not-allowed" } else { "pointer" }),
                    )
                    .attr_signal("aria-disabled", disabled.signal().map(|d| d.then_some("true")))
                    .attr_signal("aria-busy", always(loading.then_some("true")));
                match aria_label {
                    Some(label) => raw_el.attr("aria-label", &label),
                    None => raw_el,
                }
            }))
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .label(content)
            .on_press(move || {
                if disabled.get() {
                    return;
                }
                if let Some(handler) = &on_press {
                    handler();
                }
            })
            .after_remove(move |_| drop(disabled_sync))
    }

    fn create_button_content(&mut self) -> RawElOrText {
        let icon_size = self.size.icon_size();
        let label = match (self.label_signal.take(), self.label.take()) {
            (Some(signal), _) => Some(Text::with_signal(signal).unify()),
            (None, Some(label)) => Some(Text::new(label).unify()),
            (None, None) => None,
        };

        if self.loading {
            return Row::new()
                .s(Align::new().center_y())
                .s(Gap::new().x(SPACING_8))
                .item(create_spinner_icon(icon_size))
                .item(label)
                .unify();
        }

        Row::new()
            .s(Align::new().center_y())
            .s(Gap::new().x(SPACING_8))
            .item(self.start_icon.map(|name| icon(name).size(icon_size).build()))
            .item(label)
            .item(self.end_icon.map(|name| icon(name).size(icon_size).build()))
            .unify()
    }
}

impl Default for ButtonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn active_hover_signal(
    hovered: &Mutable<bool>,
    disabled: &Mutable<bool>,
) -> impl Signal<Item = bool> + use<> {
    map_ref! {
        let hovered = hovered.signal(),
        let disabled = disabled.signal() =>
        *hovered && !*disabled
    }
}

fn create_spinner_icon(size: IconSize) -> impl Element {
    let spinner_oscillator = create_spinner(Duration::milliseconds(800));
    El::new()
        .s(Transform::with_signal_self(
            spinner_oscillator
                .signal()
                .map(|factor| Transform::new().rotate(factor * 360.)),
        ))
        .child(icon(IconName::LoaderCircle).size(size).build())
}

pub fn button() -> ButtonBuilder {
    ButtonBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_inverts_to_white_on_hover() {
        let idle = ButtonVariant::Primary.colors(false);
        assert_eq!(idle.background, COLOR_ACID);
        assert_eq!(idle.text, COLOR_VOID);

        let hover = ButtonVariant::Primary.colors(true);
        assert_eq!(hover.background, COLOR_WHITE);
        assert_eq!(hover.text, COLOR_VOID);
    }

    #[test]
    fn outline_fills_and_flips_text_on_hover() {
        let idle = ButtonVariant::Outline.colors(false);
        assert_eq!(idle.background, "transparent");
        assert_eq!(idle.text, COLOR_WHITE);
        assert_eq!(idle.border, COLOR_WHITE);

        assert_eq!(ButtonVariant::Outline.colors(true).text, COLOR_VOID);
    }

    #[test]
    fn ghost_keeps_a_transparent_border() {
        for hovered in [false, true] {
            assert_eq!(ButtonVariant::Ghost.colors(hovered).border, "transparent");
        }
        assert!(!ButtonVariant::Ghost.lifts_on_hover());
        assert!(ButtonVariant::Secondary.lifts_on_hover());
    }

    #[test]
    fn sizes_grow_monotonically() {
        let small = ButtonSize::Small.metrics();
        let medium = ButtonSize::Medium.metrics();
        let large = ButtonSize::Large.metrics();
        assert!(small.0 < medium.0 && medium.0 < large.0);
        assert!(small.2 < medium.2 && medium.2 < large.2);
    }
}
