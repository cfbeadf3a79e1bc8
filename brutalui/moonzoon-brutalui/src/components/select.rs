// Select Component
// Native <select> styled to match the inputs

use crate::components::icon::*;
use crate::dom::{DomError, EventSubscription};
use crate::tokens::*;
use std::cell::RefCell;
use std::pin::Pin;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use zoon::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Listeners plus the task mirroring the value into the element.
struct SelectSession {
    _listeners: Vec<EventSubscription>,
    _sync: TaskHandle,
}

pub struct SelectBuilder {
    options: Vec<SelectOption>,
    placeholder: Option<String>,
    value_signal: Option<Pin<Box<dyn Signal<Item = String>>>>,
    on_change: Option<Rc<dyn Fn(String)>>,
    aria_label: String,
    font_size: u32,
    height: u32,
    focus_color: &'static str,
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            placeholder: None,
            value_signal: None,
            on_change: None,
            aria_label: "Select".to_owned(),
            font_size: FONT_SIZE_14,
            height: 44,
            focus_color: COLOR_PRIMARY,
        }
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Disabled first entry shown while the value matches no option.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value_signal(mut self, value: impl Signal<Item = String> + 'static) -> Self {
        self.value_signal = Some(value.boxed_local());
        self
    }

    pub fn on_change(mut self, handler: impl Fn(String) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = label.into();
        self
    }

    /// Smaller variant used inside dense controls such as table pagers.
    pub fn compact(mut self) -> Self {
        self.font_size = FONT_SIZE_12;
        self.height = 32;
        self
    }

    pub fn build(self) -> impl Element {
        let session: Rc<RefCell<Option<SelectSession>>> = Rc::default();
        let focused = Mutable::new(false);
        let focus_color = self.focus_color;
        let value_signal = self.value_signal;
        let on_change = self.on_change;
        let font_size = self.font_size;

        let select = RawHtmlEl::new("select")
            .attr("aria-label", &self.aria_label)
            .style("appearance", "none")
            .style("width", "100%")
            .style("height", &format!("{}px", self.height))
            .style("padding", &format!("0 {SPACING_32}px 0 {SPACING_12}px"))
            .style("background-color", COLOR_SURFACE)
            .style("color", COLOR_WHITE)
            .style("border-style", BORDER_STYLE_SOLID)
            .style("border-width", &format!("{BORDER_WIDTH_2}px"))
            .style("font-family", FONT_FAMILY_MONO)
            .style("font-size", &format!("{font_size}px"))
            .style("outline", "none")
            .style("cursor", "pointer")
            .style("transition", "border-color 0.2s")
            .style_signal(
                "border-color",
                focused.signal().map(move |focused| if focused { focus_color } else { COLOR_LINE }),
            )
            .child(self.placeholder.map(|placeholder| {
                RawHtmlEl::new("option")
                    .attr("value", "")
                    .attr("disabled", "")
                    .child(Text::new(placeholder))
            }))
            .children(self.options.into_iter().map(|option| {
                RawHtmlEl::new("option")
                    .attr("value", &option.value)
                    .child(Text::new(option.label))
            }))
            .after_insert(clone!((session, focused) move |element: web_sys::HtmlElement| {
                match SelectSession::start(element, focused, value_signal, on_change) {
                    Ok(started) => {
                        session.replace(Some(started));
                    }
                    Err(error) => zoon::eprintln!("Select is inert: {error}"),
                }
            }))
            .after_remove(move |_| {
                session.take();
            });

        Stack::new()
            .s(Width::fill())
            .layer(select)
            .layer(
                El::new()
                    .s(Align::new().right().center_y())
                    .s(Padding::new().right(SPACING_12))
                    .s(Font::new().color(COLOR_PRIMARY))
                    .update_raw_el(|raw_el| raw_el.style("pointer-events", "none"))
                    .child(icon(IconName::ChevronDown).size(IconSize::Small).build()),
            )
    }
}

impl Default for SelectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectSession {
    fn start(
        element: web_sys::HtmlElement,
        focused: Mutable<bool>,
        value_signal: Option<Pin<Box<dyn Signal<Item = String>>>>,
        on_change: Option<Rc<dyn Fn(String)>>,
    ) -> Result<Self, DomError> {
        let select = element
            .dyn_into::<web_sys::HtmlSelectElement>()
            .map_err(|_| DomError::Js("element is not a <select>".to_owned()))?;

        let value_signal = value_signal.unwrap_or_else(|| always(String::new()).boxed_local());
        let sync = Task::start_droppable({
            let select = select.clone();
            value_signal.for_each_sync(move |value| select.set_value(&value))
        });

        let target: &web_sys::EventTarget = select.as_ref();
        let listeners = vec![
            EventSubscription::attach(target, "change", false, move |event| {
                let value = event
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::HtmlSelectElement>().ok())
                    .map(|select| select.value());
                if let (Some(value), Some(handler)) = (value, &on_change) {
                    handler(value);
                }
            })?,
            EventSubscription::attach(target, "focus", false, clone!((focused) move |_| focused.set_neq(true)))?,
            EventSubscription::attach(target, "blur", false, move |_| focused.set_neq(false))?,
        ];

        Ok(Self {
            _listeners: listeners,
            _sync: sync,
        })
    }
}

pub fn select() -> SelectBuilder {
    SelectBuilder::new()
}
