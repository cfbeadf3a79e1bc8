use super::tracker::*;
use crate::dom::{document, window, DomError, EventSubscription};
use crate::tokens::glow_shadow;
use std::cell::RefCell;
use std::rc::Rc;
use zoon::*;

fn measure() -> Result<ScrollMetrics, DomError> {
    let window = window()?;
    let document_height = document()?
        .document_element()
        .map(|root| f64::from(root.scroll_height()))
        .ok_or(DomError::NoDocument)?;
    Ok(ScrollMetrics {
        scroll_top: window.scroll_y()?,
        document_height,
        viewport_height: window.inner_height()?.as_f64().unwrap_or_default(),
    })
}

fn update_fraction(fraction: &Mutable<f64>) {
    match measure() {
        Ok(metrics) => fraction.set_neq(metrics.fraction()),
        Err(error) => zoon::eprintln!("Scroll progress cannot measure the page: {error}"),
    }
}

pub struct ScrollProgressBuilder {
    config: ScrollProgressConfig,
}

impl ScrollProgressBuilder {
    pub fn new() -> Self {
        Self {
            config: ScrollProgressConfig::default(),
        }
    }

    pub fn config(mut self, config: ScrollProgressConfig) -> Self {
        self.config = config;
        self
    }

    pub fn position(mut self, position: BarEdge) -> Self {
        self.config.position = position;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.config.color = color.into();
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.config.height = height;
        self
    }

    pub fn glow(mut self, glow: bool) -> Self {
        self.config.glow = glow;
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.config.z_index = z_index;
        self
    }

    pub fn build(self) -> impl Element {
        let ScrollProgressConfig {
            position,
            color,
            height,
            glow,
            z_index,
        } = self.config;
        let fraction = Mutable::new(0.0);
        let subscription: Rc<RefCell<Option<EventSubscription>>> = Rc::default();

        El::new()
            .s(Width::fill())
            .s(Height::exact(height))
            .update_raw_el(move |raw_el| {
                raw_el
                    .style("position", "fixed")
                    .style("left", "0")
                    .style(position.css_property(), "0")
                    .style("z-index", &z_index.to_string())
                    .style("pointer-events", "none")
                    .attr("role", "progressbar")
                    .attr("aria-label", "Scroll progress")
                    .attr("aria-valuemin", "0")
                    .attr("aria-valuemax", "100")
            })
            .update_raw_el(clone!((fraction) move |raw_el| {
                raw_el.attr_signal(
                    "aria-valuenow",
                    fraction.signal().map(|fraction| progress_percent(fraction).to_string()),
                )
            }))
            .child(
                El::new()
                    .s(Height::fill())
                    .s(Width::percent_signal(fraction.signal().map(|fraction| (fraction * 100.0) as f32)))
                    .update_raw_el(move |raw_el| {
                        let raw_el = raw_el
                            .style("background-color", &color)
                            .style("transition", "width 0.1s ease-out");
                        if glow {
                            raw_el.style("box-shadow", &glow_shadow(&color))
                        } else {
                            raw_el
                        }
                    }),
            )
            .after_insert(clone!((fraction, subscription) move |_| {
                update_fraction(&fraction);
                match EventSubscription::on_window_passive("scroll", move |_| update_fraction(&fraction)) {
                    Ok(attached) => {
                        subscription.replace(Some(attached));
                    }
                    Err(error) => zoon::eprintln!("Scroll progress failed to listen for scrolling: {error}"),
                }
            }))
            .after_remove(move |_| {
                subscription.take();
            })
    }
}

impl Default for ScrollProgressBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn scroll_progress() -> ScrollProgressBuilder {
    ScrollProgressBuilder::new()
}
