//! ShowcaseApp - root layout shared by every page

use crate::config::{cursor_config, load_showcase_config, scroll_progress_config};
use crate::pages::{design_system, home};
use crate::router::{Route, Router};
use moonzoon_brutalui::*;
use shared::ShowcaseConfig;
use zoon::*;

pub struct ShowcaseApp {
    pub config: ShowcaseConfig,
    pub router: Router,
    /// One toaster for the whole app, pages only push into it.
    pub toaster: Toaster,
}

impl ShowcaseApp {
    pub fn new() -> Self {
        let config = load_showcase_config();
        let toaster = Toaster::new(config.toast.timeout_ms);
        Self {
            config,
            router: Router::new(),
            toaster,
        }
    }

    /// Root UI element
    pub fn root(&self) -> impl Element {
        Column::new()
            .s(Width::fill())
            .s(Background::new().color(COLOR_VOID))
            .s(Font::new().color(COLOR_WHITE))
            .s(font_sans())
            .update_raw_el(|raw_el| raw_el.style("min-height", "100vh"))
            .item(scroll_progress().config(scroll_progress_config(&self.config)).build())
            .item(custom_cursor().config(cursor_config(&self.config)).build())
            .item(El::new().s(Width::fill()).child_signal(self.router.route_signal().map({
                let router = self.router.clone();
                let config = self.config.clone();
                let toaster = self.toaster.clone();
                move |route| match route {
                    Route::Home => home::page(&router).unify(),
                    Route::DesignSystem => design_system::page(&config, &toaster).unify(),
                }
            })))
            .item(self.toaster.view())
    }
}
