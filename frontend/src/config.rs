//! Showcase configuration mapped onto component configs.

use moonzoon_brutalui::{BarEdge, BlendMode, CursorConfig, Pagination, ScrollProgressConfig};
use shared::ShowcaseConfig;

const SHOWCASE_TOML: &str = include_str!("../showcase.toml");

/// Embedded `showcase.toml`, or the defaults when it does not validate.
pub fn load_showcase_config() -> ShowcaseConfig {
    match ShowcaseConfig::parse(SHOWCASE_TOML) {
        Ok(config) => config,
        Err(error) => {
            zoon::eprintln!("Using default showcase config: {error}");
            ShowcaseConfig::default()
        }
    }
}

pub fn cursor_config(config: &ShowcaseConfig) -> CursorConfig {
    let cursor = &config.cursor;
    CursorConfig {
        color: cursor.color.clone(),
        size: cursor.size,
        trail: cursor.trail,
        blend_mode: BlendMode::from_name(&cursor.blend_mode).unwrap_or_default(),
    }
}

pub fn scroll_progress_config(config: &ShowcaseConfig) -> ScrollProgressConfig {
    let bar = &config.scroll_progress;
    ScrollProgressConfig {
        position: BarEdge::from_name(&bar.position).unwrap_or_default(),
        color: bar.color.clone(),
        height: bar.height,
        glow: bar.glow,
        z_index: bar.z_index,
    }
}

/// `Pagination::new` snaps the configured size to a pager preset.
pub fn initial_pagination(config: &ShowcaseConfig) -> Pagination {
    Pagination::new(0, config.table.initial_page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_component_defaults() {
        let config = load_showcase_config();
        assert_eq!(cursor_config(&config), CursorConfig::default());
        assert_eq!(scroll_progress_config(&config), ScrollProgressConfig::default());
        assert_eq!(initial_pagination(&config).page_size(), 10);
    }

    #[test]
    fn names_map_onto_component_enums() {
        let mut config = ShowcaseConfig::default();
        config.cursor.blend_mode = "screen".to_string();
        config.scroll_progress.position = "bottom".to_string();
        assert_eq!(cursor_config(&config).blend_mode, BlendMode::Screen);
        assert_eq!(scroll_progress_config(&config).position, BarEdge::Bottom);
    }

    #[test]
    fn page_size_snaps_to_a_pager_preset() {
        let mut config = ShowcaseConfig::default();
        config.table.initial_page_size = 27;
        assert_eq!(initial_pagination(&config).page_size(), 30);
        config.table.initial_page_size = 500;
        assert_eq!(initial_pagination(&config).page_size(), 50);
    }
}
