use super::tracker::*;
use crate::dom::{BodyCursor, CursorSuppression, DomError, EventSubscription};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use zoon::*;

/// Listeners and the hidden body cursor of one mounted overlay.
struct PointerSession {
    _subscriptions: Vec<EventSubscription>,
    _suppression: Option<CursorSuppression<BodyCursor>>,
}

impl PointerSession {
    fn start(state: &Mutable<PointerState>) -> Result<Self, DomError> {
        let subscriptions = vec![
            EventSubscription::on_document("mousemove", {
                let state = state.clone();
                move |event: web_sys::Event| {
                    if let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() {
                        let input = PointerInput::Moved {
                            x: f64::from(event.client_x()),
                            y: f64::from(event.client_y()),
                        };
                        state.update_mut(|state| state.apply(input));
                    }
                }
            })?,
            EventSubscription::on_document("mouseenter", boundary_handler(state, PointerInput::Entered))?,
            EventSubscription::on_document("mouseleave", boundary_handler(state, PointerInput::Left))?,
        ];

        // The overlay still works with the native cursor visible.
        let suppression = match BodyCursor::new() {
            Ok(host) => Some(CursorSuppression::acquire(host)),
            Err(error) => {
                zoon::eprintln!("Custom cursor cannot hide the native cursor: {error}");
                None
            }
        };

        Ok(Self {
            _subscriptions: subscriptions,
            _suppression: suppression,
        })
    }
}

fn boundary_handler(state: &Mutable<PointerState>, input: PointerInput) -> impl FnMut(web_sys::Event) + use<> {
    let state = state.clone();
    move |_| state.update_mut(|state| state.apply(input))
}

pub struct CustomCursorBuilder {
    config: CursorConfig,
}

impl CustomCursorBuilder {
    pub fn new() -> Self {
        Self {
            config: CursorConfig::default(),
        }
    }

    pub fn config(mut self, config: CursorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.config.color = color.into();
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.config.size = size;
        self
    }

    pub fn trail(mut self, trail: bool) -> Self {
        self.config.trail = trail;
        self
    }

    pub fn blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.config.blend_mode = blend_mode;
        self
    }

    pub fn build(self) -> impl Element {
        let state = Mutable::new(PointerState::default());
        let session: Rc<RefCell<Option<PointerSession>>> = Rc::default();
        let config = self.config;

        Row::new()
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("aria-hidden", "true")
                    .style("pointer-events", "none")
            })
            .item(overlay_layer(&state, &config, OverlayLayer::Dot))
            .item(config.trail.then(|| overlay_layer(&state, &config, OverlayLayer::Trail)))
            .after_insert(clone!((state, session) move |_| {
                match PointerSession::start(&state) {
                    Ok(started) => {
                        session.replace(Some(started));
                    }
                    Err(error) => zoon::eprintln!("Custom cursor failed to start tracking: {error}"),
                }
            }))
            .after_remove(move |_| {
                session.take();
            })
    }
}

impl Default for CustomCursorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn overlay_layer(state: &Mutable<PointerState>, config: &CursorConfig, layer: OverlayLayer) -> impl Element + use<> {
    let size = config.size;
    let diameter = OverlayStyle::compute(&PointerState::default(), size, layer).diameter;
    let (z_index, transition) = match layer {
        OverlayLayer::Dot => (DOT_Z_INDEX, DOT_TRANSITION),
        OverlayLayer::Trail => (TRAIL_Z_INDEX, TRAIL_TRANSITION),
    };
    let color = config.color.clone();
    let blend_mode = config.blend_mode;

    El::new().update_raw_el(clone!((state) move |raw_el| {
        raw_el
            .style("position", "fixed")
            .style("pointer-events", "none")
            .style("border-radius", "50%")
            .style("width", &px(diameter))
            .style("height", &px(diameter))
            .style("background-color", &color)
            .style("mix-blend-mode", blend_mode.css_value())
            .style("z-index", &z_index.to_string())
            .style("transition", transition)
            .style_signal("left", state.signal_ref(move |state| px(OverlayStyle::compute(state, size, layer).left)))
            .style_signal("top", state.signal_ref(move |state| px(OverlayStyle::compute(state, size, layer).top)))
            .style_signal("opacity", state.signal_ref(move |state| OverlayStyle::compute(state, size, layer).opacity.to_string()))
    }))
}

fn px(value: f64) -> String {
    format!("{value}px")
}

pub fn custom_cursor() -> CustomCursorBuilder {
    CustomCursorBuilder::new()
}
