use super::{document, window, DomError};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// A registered DOM event listener.
///
/// The listener stays attached for as long as this value lives and is
/// detached exactly once when it is dropped.
pub struct EventSubscription {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn attach(
        target: &EventTarget,
        event_type: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, DomError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }

    pub fn on_document(
        event_type: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, DomError> {
        Self::attach(document()?.as_ref(), event_type, false, handler)
    }

    /// Passive window listener, it never blocks scrolling.
    pub fn on_window_passive(
        event_type: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, DomError> {
        Self::attach(window()?.as_ref(), event_type, true, handler)
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Err(error) = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref())
        {
            zoon::eprintln!("Failed to detach '{}' listener: {:?}", self.event_type, error);
        }
    }
}
