// Input Component
// Labelled text field with helper and error lines

use crate::components::icon::*;
use crate::tokens::*;
use std::pin::Pin;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputVariant {
    #[default]
    Default,
    Filled,
    Underline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Search,
}

impl InputKind {
    pub fn html_type(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Search => "search",
        }
    }
}

impl InputSize {
    /// (height, padding x, font size)
    fn metrics(self) -> (u32, u32, u32) {
        match self {
            InputSize::Small => (32, SPACING_12, FONT_SIZE_12),
            InputSize::Medium => (40, SPACING_16, FONT_SIZE_14),
            InputSize::Large => (52, SPACING_20, FONT_SIZE_16),
        }
    }
}

/// Interaction state the field frame is painted from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldLook {
    pub focused: bool,
    pub hovered: bool,
    pub invalid: bool,
}

impl InputVariant {
    pub fn background(self) -> &'static str {
        match self {
            InputVariant::Default => COLOR_CONCRETE,
            InputVariant::Filled => COLOR_DARK,
            InputVariant::Underline => "transparent",
        }
    }

    /// Error wins over focus, focus wins over hover.
    pub fn border_color(self, look: FieldLook, focus_color: &'static str) -> &'static str {
        if look.invalid {
            return COLOR_ERROR;
        }
        if look.focused {
            return focus_color;
        }
        match self {
            InputVariant::Filled if !look.hovered => "transparent",
            _ => COLOR_LINE,
        }
    }

    fn border_width(self) -> String {
        match self {
            InputVariant::Underline => format!("0 0 {BORDER_WIDTH_2}px 0"),
            _ => format!("{BORDER_WIDTH_2}px"),
        }
    }
}

pub struct InputBuilder {
    label: Option<String>,
    placeholder: String,
    text: String,
    text_signal: Option<Pin<Box<dyn Signal<Item = String>>>>,
    variant: InputVariant,
    size: InputSize,
    kind: InputKind,
    helper_text: Option<String>,
    error_text: Option<String>,
    error_signal: Option<Pin<Box<dyn Signal<Item = Option<String>>>>>,
    start_icon: Option<IconName>,
    end_icon: Option<IconName>,
    focus_color: &'static str,
    background: Option<&'static str>,
    required: bool,
    disabled: bool,
    on_change: Option<Box<dyn Fn(String)>>,
    on_blur: Option<Box<dyn Fn()>>,
}

impl InputBuilder {
    pub fn new() -> Self {
        Self {
            label: None,
            placeholder: String::new(),
            text: String::new(),
            text_signal: None,
            variant: InputVariant::default(),
            size: InputSize::default(),
            kind: InputKind::default(),
            helper_text: None,
            error_text: None,
            error_signal: None,
            start_icon: None,
            end_icon: None,
            focus_color: COLOR_ACID,
            background: None,
            required: false,
            disabled: false,
            on_change: None,
            on_blur: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn text_signal(mut self, text: impl Signal<Item = String> + 'static) -> Self {
        self.text_signal = Some(text.boxed_local());
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    /// The error line replaces the helper line and reddens the frame.
    pub fn error_text(mut self, error_text: impl Into<String>) -> Self {
        self.error_text = Some(error_text.into());
        self
    }

    pub fn error_signal(mut self, error: impl Signal<Item = Option<String>> + 'static) -> Self {
        self.error_signal = Some(error.boxed_local());
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

    pub fn focus_color(mut self, color: &'static str) -> Self {
        self.focus_color = color;
        self
    }

    /// Overrides the variant background.
    pub fn background(mut self, color: &'static str) -> Self {
        self.background = Some(color);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(String) + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn on_blur<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_blur = Some(Box::new(handler));
        self
    }

    pub fn build(mut self) -> impl Element {
        let error = Mutable::new(self.error_text.take());
        let error_sync = self.error_signal.take().map(|signal| {
            Task::start_droppable({
                let error = error.clone();
                async move { signal.for_each_sync(move |next| error.set(next)).await }
            })
        });

        let hint = self.label_hint();
        let label = self.label.take().map(|label| {
            let text = if self.required { format!("{label} *") } else { label };
            field_label(text)
        });
        let helper_text = self.helper_text.take();
        let field = self.build_field(&error, hint);

        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_6))
            .item(label)
            .item(field)
            .item_signal(error.signal_cloned().map(move |error| match error {
                Some(message) => Some(message_line(message, COLOR_ERROR, true)),
                None => helper_text
                    .clone()
                    .map(|helper| message_line(helper, COLOR_MUTED, false)),
            }))
            .after_remove(move |_| drop(error_sync))
    }

    fn build_field(&mut self, error: &Mutable<Option<String>>, hint: String) -> impl Element + use<> {
        let (height, padding_x, font_size) = self.size.metrics();
        let variant = self.variant;
        let focus_color = self.focus_color;
        let background = self.background.unwrap_or(variant.background());
        let disabled = self.disabled;
        let html_type = self.kind.html_type();
        let icon_size = match self.size {
            InputSize::Large => IconSize::Medium,
            _ => IconSize::Small,
        };

        let text = self
            .text_signal
            .take()
            .unwrap_or_else(|| always(self.text.clone()).boxed_local());

        let focused = Mutable::new(false);
        let hovered = Mutable::new(false);
        let look = map_ref! {
            let focused = focused.signal(),
            let hovered = hovered.signal(),
            let invalid = error.signal_ref(Option::is_some) =>
            FieldLook { focused: *focused, hovered: *hovered, invalid: *invalid }
        };

        let text_input = TextInput::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(font_mono())
            .s(Font::new().size(font_size).color(COLOR_WHITE))
            .s(Background::new().color("transparent"))
            .s(Borders::new())
            .placeholder(Placeholder::new(&self.placeholder).s(Font::new().color(COLOR_MUTED)))
            .label_hidden(hint)
            .text_signal(text)
            .update_raw_el(clone!((error) move |raw_el| {
                let raw_el = raw_el
                    .attr("type", html_type)
                    .style("outline", "none")
                    .attr_signal("aria-invalid", error.signal_ref(|error| error.is_some().then_some("true")));
                if disabled {
                    raw_el.attr("disabled", "").style("cursor", "not-allowed")
                } else {
                    raw_el
                }
            }))
            .on_focus(clone!((focused) move || focused.set_neq(true)))
            .on_blur({
                let focused = focused.clone();
                let on_blur = self.on_blur.take();
                move || {
                    focused.set_neq(false);
                    if let Some(handler) = &on_blur {
                        handler();
                    }
                }
            })
            .on_change({
                let on_change = self.on_change.take();
                move |text| {
                    if let Some(handler) = &on_change {
                        handler(text);
                    }
                }
            });

        Row::new()
            .s(Width::fill())
            .s(Height::exact(height))
            .s(Padding::new().x(padding_x))
            .s(Gap::new().x(SPACING_8))
            .s(Align::new().center_y())
            .s(Background::new().color(background))
            .s(Font::new().color(COLOR_MUTED))
            .s(transition_colors())
            .update_raw_el(move |raw_el| {
                raw_el
                    .style("border-style", BORDER_STYLE_SOLID)
                    .style("border-width", &variant.border_width())
                    .style_signal("border-color", look.map(move |look| variant.border_color(look, focus_color)))
                    .style("opacity", if disabled { OPACITY_DISABLED } else { OPACITY_OPAQUE })
            })
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .item(self.start_icon.map(|name| icon(name).size(icon_size).build()))
            .item(text_input)
            .item(self.end_icon.map(|name| icon(name).size(icon_size).build()))
    }

    fn label_hint(&self) -> String {
        match (&self.label, self.placeholder.is_empty()) {
            (Some(label), _) => label.clone(),
            (None, false) => self.placeholder.clone(),
            (None, true) => "Input".to_owned(),
        }
    }
}

impl Default for InputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn field_label(text: String) -> impl Element {
    El::new()
        .s(font_mono())
        .s(Font::new().size(FONT_SIZE_14).weight(FontWeight::Bold).color(COLOR_MUTED))
        .update_raw_el(|raw_el| {
            raw_el
                .style("text-transform", "uppercase")
                .style("letter-spacing", &format!("{LETTER_SPACING_WIDE}em"))
        })
        .child(Text::new(text))
}

fn message_line(text: String, color: &'static str, alert: bool) -> impl Element {
    El::new()
        .s(font_mono())
        .s(Font::new().size(FONT_SIZE_12).color(color))
        .update_raw_el(move |raw_el| if alert { raw_el.attr("role", "alert") } else { raw_el })
        .child(Text::new(text))
}

pub fn input() -> InputBuilder {
    InputBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_outranks_focus() {
        let look = FieldLook {
            focused: true,
            hovered: true,
            invalid: true,
        };
        assert_eq!(InputVariant::Default.border_color(look, COLOR_ACID), COLOR_ERROR);
    }

    #[test]
    fn focus_paints_the_accent() {
        let look = FieldLook {
            focused: true,
            ..FieldLook::default()
        };
        assert_eq!(InputVariant::Default.border_color(look, COLOR_ACID), COLOR_ACID);
        assert_eq!(InputVariant::Filled.border_color(look, COLOR_PRIMARY), COLOR_PRIMARY);
    }

    #[test]
    fn filled_border_only_shows_on_hover() {
        let idle = FieldLook::default();
        let hovered = FieldLook {
            hovered: true,
            ..FieldLook::default()
        };
        assert_eq!(InputVariant::Filled.border_color(idle, COLOR_ACID), "transparent");
        assert_eq!(InputVariant::Filled.border_color(hovered, COLOR_ACID), COLOR_LINE);
        assert_eq!(InputVariant::Default.border_color(idle, COLOR_ACID), COLOR_LINE);
    }

    #[test]
    fn kinds_map_to_html_types() {
        assert_eq!(InputKind::default().html_type(), "text");
        assert_eq!(InputKind::Email.html_type(), "email");
        assert_eq!(InputKind::Password.html_type(), "password");
        assert_eq!(InputKind::Search.html_type(), "search");
    }
}
