//! Path based routing on top of the History API.

use moonzoon_brutalui::dom::{window, DomError, EventSubscription};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use zoon::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    DesignSystem,
}

impl Route {
    /// Unknown paths land on the home page.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/design-system" => Route::DesignSystem,
            _ => Route::Home,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::DesignSystem => "/design-system",
        }
    }
}

fn current_path() -> Result<String, DomError> {
    Ok(window()?.location().pathname()?)
}

/// Current route plus the `popstate` listener that keeps it in sync with
/// the browser's back and forward buttons.
#[derive(Clone)]
pub struct Router {
    route: Mutable<Route>,
    _popstate: Option<Rc<EventSubscription>>,
}

impl Router {
    pub fn new() -> Self {
        let initial = current_path()
            .map(|path| Route::from_path(&path))
            .unwrap_or_else(|error| {
                zoon::eprintln!("Cannot read the current path: {error}");
                Route::default()
            });
        let route = Mutable::new(initial);

        let popstate = EventSubscription::on_window_passive("popstate", {
            let route = route.clone();
            move |_| match current_path() {
                Ok(path) => route.set_neq(Route::from_path(&path)),
                Err(error) => zoon::eprintln!("popstate without a path: {error}"),
            }
        });
        let popstate = match popstate {
            Ok(subscription) => Some(Rc::new(subscription)),
            Err(error) => {
                zoon::eprintln!("Back/forward navigation is not tracked: {error}");
                None
            }
        };

        Self {
            route,
            _popstate: popstate,
        }
    }

    pub fn route_signal(&self) -> impl Signal<Item = Route> + use<> {
        self.route.signal()
    }

    pub fn go(&self, route: Route) {
        if self.route.get() == route {
            return;
        }
        let pushed = window().and_then(|window| {
            window
                .history()?
                .push_state_with_url(&JsValue::NULL, "", Some(route.path()))
                .map_err(DomError::from)
        });
        if let Err(error) = pushed {
            zoon::eprintln!("Failed to push {}: {error}", route.path());
        }
        zoon::println!("Route: {}", route.path());
        self.route.set_neq(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_routes() {
        for route in [Route::Home, Route::DesignSystem] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn trailing_slash_and_unknown_paths() {
        assert_eq!(Route::from_path("/design-system/"), Route::DesignSystem);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/nope"), Route::Home);
    }
}
