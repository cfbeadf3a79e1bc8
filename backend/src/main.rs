use moon::*;
use shared::ShowcaseConfig;

const SHOWCASE_CONFIG_PATH: &str = "frontend/showcase.toml";

async fn frontend() -> Frontend {
    Frontend::new()
        .title("Brutalist Design System")
        .index_by_robots(false)
}

// The showcase is fully client-side; nothing is sent up.
async fn up_msg_handler(_req: UpMsgRequest<()>) {}

/// The frontend embeds `showcase.toml` at build time, so a broken file is
/// reported here before anyone opens the page.
fn check_showcase_config() {
    match std::fs::read_to_string(SHOWCASE_CONFIG_PATH) {
        Ok(source) => match ShowcaseConfig::parse(&source) {
            Ok(config) => println!(
                "Showcase config OK (page size {}, toast timeout {} ms)",
                config.table.initial_page_size, config.toast.timeout_ms
            ),
            Err(error) => eprintln!("{SHOWCASE_CONFIG_PATH}: {error}"),
        },
        Err(error) => eprintln!("Cannot read {SHOWCASE_CONFIG_PATH}: {error}"),
    }
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    check_showcase_config();
    start(frontend, up_msg_handler, |_error| {}).await
}
