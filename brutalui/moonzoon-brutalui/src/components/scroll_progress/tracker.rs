use crate::tokens::COLOR_ACID;

/// One reading of the page geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Vertical progress in `[0, 1]`; a page that cannot scroll reports `0`.
    pub fn fraction(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if !(scrollable > 0.0) {
            return 0.0;
        }
        let fraction = self.scroll_top / scrollable;
        if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 }
    }
}

/// Value announced through `aria-valuenow`.
pub fn progress_percent(fraction: f64) -> u8 {
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u8
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BarEdge {
    #[default]
    Top,
    Bottom,
}

impl BarEdge {
    pub fn css_property(self) -> &'static str {
        match self {
            BarEdge::Top => "top",
            BarEdge::Bottom => "bottom",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top" => Some(BarEdge::Top),
            "bottom" => Some(BarEdge::Bottom),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollProgressConfig {
    pub position: BarEdge,
    pub color: String,
    pub height: u32,
    pub glow: bool,
    pub z_index: i32,
}

impl Default for ScrollProgressConfig {
    fn default() -> Self {
        Self {
            position: BarEdge::Top,
            color: COLOR_ACID.to_string(),
            height: 3,
            glow: true,
            z_index: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_top: f64, document_height: f64, viewport_height: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            document_height,
            viewport_height,
        }
    }

    #[test]
    fn fraction_is_scroll_offset_over_scrollable_distance() {
        assert_eq!(metrics(0.0, 3000.0, 1000.0).fraction(), 0.0);
        assert_eq!(metrics(500.0, 3000.0, 1000.0).fraction(), 0.25);
        assert_eq!(metrics(2000.0, 3000.0, 1000.0).fraction(), 1.0);
    }

    #[test]
    fn fraction_is_clamped_during_overscroll() {
        assert_eq!(metrics(-40.0, 3000.0, 1000.0).fraction(), 0.0);
        assert_eq!(metrics(2100.0, 3000.0, 1000.0).fraction(), 1.0);
    }

    #[test]
    fn unscrollable_page_reports_zero() {
        assert_eq!(metrics(0.0, 800.0, 800.0).fraction(), 0.0);
        assert_eq!(metrics(10.0, 800.0, 800.0).fraction(), 0.0);
        assert_eq!(metrics(0.0, 600.0, 800.0).fraction(), 0.0);
    }

    #[test]
    fn bogus_geometry_reports_zero() {
        assert_eq!(metrics(f64::NAN, 3000.0, 1000.0).fraction(), 0.0);
        assert_eq!(metrics(100.0, f64::NAN, 1000.0).fraction(), 0.0);
    }

    #[test]
    fn fraction_stays_in_bounds_over_a_sweep() {
        for document_height in [1001.0, 1500.0, 10_000.0] {
            for step in -10..=120 {
                let scroll_top = f64::from(step) * 100.0;
                let fraction = metrics(scroll_top, document_height, 1000.0).fraction();
                assert!((0.0..=1.0).contains(&fraction));
            }
        }
    }

    #[test]
    fn percent_is_rounded() {
        assert_eq!(progress_percent(0.0), 0);
        assert_eq!(progress_percent(0.333), 33);
        assert_eq!(progress_percent(0.336), 34);
        assert_eq!(progress_percent(1.0), 100);
    }

    #[test]
    fn defaults_pin_a_thin_glowing_bar_to_the_top() {
        let config = ScrollProgressConfig::default();
        assert_eq!(config.position, BarEdge::Top);
        assert_eq!(config.color, "#ccff00");
        assert_eq!(config.height, 3);
        assert!(config.glow);
        assert_eq!(config.z_index, 1000);
    }
}
