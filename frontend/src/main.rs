//! Brutalist Design System showcase entry point

use std::sync::OnceLock;
use zoon::*;

/// Stores the main application task handle to prevent it from being dropped.
static MAIN_TASK: OnceLock<TaskHandle> = OnceLock::new();

mod app;
mod config;
mod pages;
mod router;

pub fn main() {
    let handle = Task::start_droppable(async {
        let app = crate::app::ShowcaseApp::new();
        let root_element = app.root();
        start_app("app", move || root_element);
    });
    let _ = MAIN_TASK.set(handle);
}
