use super::validation::*;
use crate::components::input::*;
use crate::components::select::*;
use crate::tokens::*;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use zoon::*;

type SubmitHandler = Rc<dyn Fn(FormValues) -> Pin<Box<dyn Future<Output = ()>>>>;

/// Shared form state for fields and the submit button.
#[derive(Clone)]
pub struct FormHandle {
    state: Mutable<FormState>,
}

impl FormHandle {
    pub fn new(state: FormState) -> Self {
        Self {
            state: Mutable::new(state),
        }
    }

    pub fn set_value(&self, name: &str, value: String) {
        if let Err(error) = self.state.lock_mut().set_value(name, value) {
            zoon::eprintln!("Form: {error}");
        }
    }

    pub fn touch(&self, name: &str) {
        self.state.lock_mut().touch(name);
    }

    pub fn values(&self) -> FormValues {
        self.state.lock_ref().values()
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.state.lock_ref().is_required(name)
    }

    pub fn value_signal(&self, name: &str) -> impl Signal<Item = String> + use<> {
        let name = name.to_owned();
        self.state
            .signal_ref(move |state| state.value(&name).unwrap_or_default().to_owned())
            .dedupe_cloned()
    }

    pub fn error_signal(&self, name: &str) -> impl Signal<Item = Option<String>> + use<> {
        let name = name.to_owned();
        self.state
            .signal_ref(move |state| state.visible_error(&name))
            .dedupe_cloned()
    }

    pub fn can_submit_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.state.signal_ref(FormState::can_submit).dedupe()
    }

    pub fn submitting_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.state.signal_ref(FormState::is_submitting).dedupe()
    }

    /// Runs `handler` with the values when every rule passes.
    fn submit(&self, handler: Option<SubmitHandler>) {
        let values = match self.state.lock_mut().begin_submit() {
            Ok(values) => values,
            Err(error) => {
                zoon::println!("Form not submitted: {error}");
                return;
            }
        };
        let state = self.state.clone();
        Task::start(async move {
            if let Some(handler) = handler {
                handler(values).await;
            }
            state.lock_mut().finish_submit();
        });
    }
}

pub struct FormBuilder {
    handle: FormHandle,
    items: Vec<RawElOrText>,
    on_submit: Option<SubmitHandler>,
    submit_label: String,
    show_submit: bool,
}

impl FormBuilder {
    pub fn new(handle: FormHandle) -> Self {
        Self {
            handle,
            items: Vec::new(),
            on_submit: None,
            submit_label: "Submit".to_owned(),
            show_submit: true,
        }
    }

    pub fn item(mut self, item: impl Element) -> Self {
        self.items.push(item.unify());
        self
    }

    pub fn on_submit<F, Fut>(mut self, handler: F) -> Self
    where
        F: Fn(FormValues) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        self.on_submit = Some(Rc::new(move |values| Box::pin(handler(values))));
        self
    }

    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Forms whose actions live elsewhere can drop the submit button.
    pub fn without_submit(mut self) -> Self {
        self.show_submit = false;
        self
    }

    pub fn build(self) -> impl Element {
        let submit = self
            .show_submit
            .then(|| submit_button(&self.handle, self.submit_label, self.on_submit));

        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_20))
            .update_raw_el(|raw_el| raw_el.attr("role", "form"))
            .items(self.items)
            .item(submit)
    }
}

fn submit_button(handle: &FormHandle, label: String, on_submit: Option<SubmitHandler>) -> impl Element + use<> {
    let hovered = Mutable::new(false);
    let enabled = Mutable::new(false);
    let enabled_sync = Task::start_droppable({
        let enabled = enabled.clone();
        handle.can_submit_signal().for_each_sync(move |can| enabled.set_neq(can))
    });
    let active_hover = clone!((hovered, enabled) move || {
        map_ref! {
            let hovered = hovered.signal(),
            let enabled = enabled.signal() =>
            *hovered && *enabled
        }
    });

    Button::new()
        .s(Height::exact(44))
        .s(Padding::new().x(SPACING_24))
        .s(font_mono())
        .s(Font::new().size(FONT_SIZE_14).weight(FontWeight::Bold))
        .s(transition_colors())
        .s(Background::new().color_signal(
            active_hover().map(|hovered| if hovered { COLOR_WHITE } else { COLOR_PRIMARY }),
        ))
        .s(Font::new().color_signal(
            active_hover().map(|hovered| if hovered { COLOR_PRIMARY } else { COLOR_WHITE }),
        ))
        .s(Borders::all(Border::new().width(BORDER_WIDTH_2).color(COLOR_PRIMARY)))
        .update_raw_el(clone!((enabled) move |raw_el| {
            raw_el
                .attr("type", "submit")
                .style("text-transform", "uppercase")
                .style("letter-spacing", &format!("{LETTER_SPACING_WIDE}em"))
                .style_signal("opacity", enabled.signal().map(|e| if e { OPACITY_OPAQUE } else { OPACITY_DISABLED }))
                .style_signal("cursor", enabled.signal().map(|e| if e { "pointer" } else { "not-allowed" }))
                .attr_signal("aria-disabled", enabled.signal().map(|e| (!e).then_some("true")))
        }))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(Text::with_signal(handle.submitting_signal().map(move |submitting| {
            if submitting {
                "Processing...".to_owned()
            } else {
                label.clone()
            }
        })))
        .on_press({
            let handle = handle.clone();
            move || {
                if enabled.get() {
                    handle.submit(on_submit.clone());
                }
            }
        })
        .after_remove(move |_| drop(enabled_sync))
}

/// Text field bound to one named field of the form.
pub struct FormFieldBuilder {
    handle: FormHandle,
    name: String,
    label: Option<String>,
    placeholder: String,
    kind: InputKind,
}

impl FormFieldBuilder {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn build(self) -> impl Element {
        let FormFieldBuilder {
            handle,
            name,
            label,
            placeholder,
            kind,
        } = self;

        let field = input()
            .kind(kind)
            .placeholder(placeholder)
            .required(handle.is_required(&name))
            .background(COLOR_SURFACE)
            .focus_color(COLOR_PRIMARY)
            .text_signal(handle.value_signal(&name))
            .error_signal(handle.error_signal(&name))
            .on_change({
                let handle = handle.clone();
                let name = name.clone();
                move |value| handle.set_value(&name, value)
            })
            .on_blur(move || handle.touch(&name));
        match label {
            Some(label) => field.label(label).build(),
            None => field.build(),
        }
    }
}

pub fn form_field(handle: &FormHandle, name: impl Into<String>) -> FormFieldBuilder {
    FormFieldBuilder {
        handle: handle.clone(),
        name: name.into(),
        label: None,
        placeholder: String::new(),
        kind: InputKind::Text,
    }
}

/// Option list bound to one named field of the form.
pub struct FormSelectBuilder {
    handle: FormHandle,
    name: String,
    label: Option<String>,
    options: Vec<SelectOption>,
    on_change: Option<Rc<dyn Fn(String)>>,
}

impl FormSelectBuilder {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(SelectOption::new(value, label));
        self
    }

    /// Called after the form value was updated.
    pub fn on_change(mut self, handler: impl Fn(String) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let FormSelectBuilder {
            handle,
            name,
            label,
            options,
            on_change,
        } = self;
        let label = label.map(|label| {
            let text = if handle.is_required(&name) {
                format!("{label} *")
            } else {
                label
            };
            field_label(text)
        });
        let error_signal = handle.error_signal(&name);

        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_8))
            .item(label)
            .item(
                select()
                    .aria_label(name.clone())
                    .placeholder("Select option")
                    .options(options)
                    .value_signal(handle.value_signal(&name))
                    .on_change(move |value: String| {
                        handle.set_value(&name, value.clone());
                        if let Some(handler) = &on_change {
                            handler(value);
                        }
                    })
                    .build(),
            )
            .item_signal(error_signal.map(|error| {
                error.map(|message| {
                    El::new()
                        .s(font_mono())
                        .s(Font::new().size(FONT_SIZE_12).color(COLOR_ERROR))
                        .update_raw_el(|raw_el| raw_el.attr("role", "alert"))
                        .child(Text::new(message))
                })
            }))
    }
}

pub fn form_select(handle: &FormHandle, name: impl Into<String>) -> FormSelectBuilder {
    FormSelectBuilder {
        handle: handle.clone(),
        name: name.into(),
        label: None,
        options: Vec::new(),
        on_change: None,
    }
}

pub fn form(handle: &FormHandle) -> FormBuilder {
    FormBuilder::new(handle.clone())
}
