use super::queue::*;
use crate::dataflow::{relay, Actor, Relay};
use crate::tokens::*;
use zoon::*;

const TICK_MS: u32 = 50;
const TOAST_WIDTH: u32 = 360;

/// Handle to the visible toasts. Clones share one stack.
#[derive(Clone)]
pub struct Toaster {
    queue: Mutable<ToastQueue>,
    visible: MutableVec<Toast>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TIMEOUT_MS)
    }
}

impl Toaster {
    pub fn new(default_timeout_ms: u32) -> Self {
        Self {
            queue: Mutable::new(ToastQueue::new(default_timeout_ms)),
            visible: MutableVec::new(),
        }
    }

    pub fn add(&self, spec: ToastSpec) -> ToastId {
        let Pushed { toast, evicted } = self.queue.lock_mut().push(spec);
        let id = toast.id;
        let mut visible = self.visible.lock_mut();
        if !evicted.is_empty() {
            visible.retain(|toast| !evicted.contains(&toast.id));
        }
        visible.push_cloned(toast);
        id
    }

    pub fn dismiss(&self, id: ToastId) {
        if self.queue.lock_mut().dismiss(id).is_some() {
            self.visible.lock_mut().retain(|toast| toast.id != id);
        }
    }

    pub fn len(&self) -> usize {
        self.queue.lock_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock_ref().is_empty()
    }

    /// Fixed viewport rendering the stack. Mount it once per page.
    pub fn view(&self) -> impl Element + use<> {
        let toaster = self.clone();
        Column::new()
            .s(Gap::new().y(SPACING_12))
            .s(Width::exact(TOAST_WIDTH))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("position", "fixed")
                    .style("top", &format!("{SPACING_16}px"))
                    .style("right", &format!("{SPACING_16}px"))
                    .style("z-index", "100")
                    .style("max-width", "calc(100vw - 2rem)")
                    .attr("role", "region")
                    .attr("aria-label", "Notifications")
                    .attr("aria-live", "polite")
            })
            .items_signal_vec(
                self.visible
                    .signal_vec_cloned()
                    .map(move |toast| toast_card(toast, toaster.clone())),
            )
    }
}

enum ToastCommand {
    Pause,
    Resume,
}

/// Counts the toast down and dismisses it once expired.
fn countdown(toast: &Toast, toaster: Toaster) -> (Actor<ToastProgress>, Relay<ToastCommand>) {
    let (commands, mut command_stream) = relay::<ToastCommand>();
    let id = toast.id;
    let actor = Actor::new(ToastProgress::new(toast.timeout_ms), move |state| async move {
        loop {
            while let Ok(Some(command)) = command_stream.try_next() {
                let paused = matches!(command, ToastCommand::Pause);
                state.update_mut(|progress| progress.set_paused(paused));
            }
            if state.lock_ref().is_expired() {
                toaster.dismiss(id);
                break;
            }
            Timer::sleep(TICK_MS).await;
            state.update_mut(|progress| progress.advance(TICK_MS));
        }
    });
    (actor, commands)
}

fn toast_card(toast: Toast, toaster: Toaster) -> impl Element {
    let accent = toast.kind.accent_color();
    let (progress, commands) = countdown(&toast, toaster.clone());
    let id = toast.id;

    Column::new()
        .s(Width::fill())
        .s(Padding::all(SPACING_20))
        .s(Background::new().color(COLOR_SURFACE))
        .s(Borders::all(Border::new().width(BORDER_WIDTH_2).color(accent)))
        .s(Shadows::new([Shadow::new().x(4).y(4).color(COLOR_VOID)]))
        .update_raw_el(|raw_el| {
            raw_el
                .attr("role", "status")
                .style("position", "relative")
                .style("overflow", "hidden")
        })
        .on_hovered_change(move |hovered| {
            commands.send(if hovered {
                ToastCommand::Pause
            } else {
                ToastCommand::Resume
            })
        })
        .item(
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(SPACING_12))
                .s(Align::new().top())
                .item(
                    Column::new()
                        .s(Width::fill())
                        .s(Gap::new().y(SPACING_4))
                        .item(
                            Paragraph::new()
                                .s(font_mono())
                                .s(Font::new().size(FONT_SIZE_14).weight(FontWeight::Bold).color(accent))
                                .update_raw_el(|raw_el| {
                                    raw_el
                                        .style("text-transform", "uppercase")
                                        .style("letter-spacing", "0.05em")
                                })
                                .content(toast.title.clone()),
                        )
                        .item(toast.description.clone().map(|description| {
                            Paragraph::new()
                                .s(font_mono())
                                .s(Font::new().size(FONT_SIZE_12).color(COLOR_MUTED))
                                .content(description)
                        })),
                )
                .item(close_button(move || toaster.dismiss(id))),
        )
        .item(
            El::new()
                .s(Width::fill())
                .s(Height::exact(2))
                .s(Background::new().color("rgba(58, 58, 58, 0.2)"))
                .update_raw_el(|raw_el| raw_el.style("margin-top", &format!("{SPACING_12}px")))
                .child(
                    El::new()
                        .s(Height::fill())
                        .s(Background::new().color(accent))
                        .s(Width::percent_signal(
                            progress.signal().map(|progress| progress.remaining_percent() as f32),
                        )),
                ),
        )
        .after_remove(move |_| drop(progress))
}

fn close_button(on_press: impl FnMut() + 'static) -> impl Element {
    let hovered = Mutable::new(false);

    Button::new()
        .s(Width::exact(24))
        .s(Height::exact(24))
        .s(Align::center())
        .s(font_mono())
        .s(Font::new().size(FONT_SIZE_12).weight(FontWeight::Bold))
        .s(transition_colors())
        .s(Font::new().color_signal(
            hovered.signal().map(|hovered| if hovered { COLOR_WHITE } else { COLOR_MUTED }),
        ))
        .s(Background::new().color_signal(
            hovered.signal().map(|hovered| if hovered { COLOR_PRIMARY } else { "transparent" }),
        ))
        .s(Borders::all_signal(hovered.signal().map(|hovered| {
            Border::new()
                .width(BORDER_WIDTH_1)
                .color(if hovered { COLOR_PRIMARY } else { COLOR_LINE })
        })))
        .update_raw_el(|raw_el| raw_el.attr("aria-label", "Close"))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label("X")
        .on_press(on_press)
}
