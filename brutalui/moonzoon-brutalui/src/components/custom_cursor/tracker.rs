use crate::tokens::COLOR_ACID;

/// Viewport coordinates in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// What the document reported about the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Moved { x: f64, y: f64 },
    Entered,
    Left,
}

/// Last known pointer position and whether it is inside the document.
///
/// Starts at the origin and visible, which is also what a touch-only device
/// keeps showing since it never reports a move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: PointerPosition,
    pub visible: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: PointerPosition::default(),
            visible: true,
        }
    }
}

impl PointerState {
    pub fn apply(&mut self, input: PointerInput) {
        match input {
            PointerInput::Moved { x, y } => self.position = PointerPosition { x, y },
            PointerInput::Entered => self.visible = true,
            PointerInput::Left => self.visible = false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BlendMode {
    Normal,
    #[default]
    Difference,
    Exclusion,
    Multiply,
    Screen,
}

impl BlendMode {
    pub fn css_value(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(BlendMode::Normal),
            "difference" => Some(BlendMode::Difference),
            "exclusion" => Some(BlendMode::Exclusion),
            "multiply" => Some(BlendMode::Multiply),
            "screen" => Some(BlendMode::Screen),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    pub color: String,
    pub size: f64,
    pub trail: bool,
    pub blend_mode: BlendMode,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            color: COLOR_ACID.to_string(),
            size: 32.0,
            trail: true,
            blend_mode: BlendMode::Difference,
        }
    }
}

pub const TRAIL_SCALE: f64 = 0.6;
pub const TRAIL_OPACITY: f64 = 0.5;

pub const DOT_Z_INDEX: i32 = 9999;
pub const TRAIL_Z_INDEX: i32 = 9998;

pub const DOT_TRANSITION: &str = "opacity 0.2s ease";
pub const TRAIL_TRANSITION: &str = "left 0.1s ease-out, top 0.1s ease-out, opacity 0.2s ease";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayLayer {
    Dot,
    Trail,
}

/// Render-ready geometry of one overlay layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    pub left: f64,
    pub top: f64,
    pub diameter: f64,
    pub opacity: f64,
}

impl OverlayStyle {
    /// Both layers are centered on the same position; the trail only lags
    /// behind because its `left`/`top` are transitioned.
    pub fn compute(state: &PointerState, size: f64, layer: OverlayLayer) -> Self {
        let (diameter, visible_opacity) = match layer {
            OverlayLayer::Dot => (size, 1.0),
            OverlayLayer::Trail => (size * TRAIL_SCALE, TRAIL_OPACITY),
        };
        Self {
            left: state.position.x - diameter / 2.0,
            top: state.position.y - diameter / 2.0,
            diameter,
            opacity: if state.visible { visible_opacity } else { 0.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_origin_and_visible() {
        let state = PointerState::default();
        assert_eq!(state.position, PointerPosition { x: 0.0, y: 0.0 });
        assert!(state.visible);
    }

    #[test]
    fn dot_is_centered_on_every_move() {
        let mut state = PointerState::default();
        let size = CursorConfig::default().size;
        for (x, y) in [(10.0, 20.0), (500.5, 3.0), (0.0, 0.0), (1920.0, 1080.0)] {
            state.apply(PointerInput::Moved { x, y });
            let style = OverlayStyle::compute(&state, size, OverlayLayer::Dot);
            assert_eq!(style.left, x - 16.0);
            assert_eq!(style.top, y - 16.0);
            assert_eq!(style.diameter, 32.0);
        }
    }

    #[test]
    fn leave_hides_and_enter_shows() {
        let mut state = PointerState::default();
        state.apply(PointerInput::Moved { x: 40.0, y: 40.0 });
        state.apply(PointerInput::Left);
        assert!(!state.visible);
        assert_eq!(OverlayStyle::compute(&state, 32.0, OverlayLayer::Dot).opacity, 0.0);

        state.apply(PointerInput::Entered);
        assert!(state.visible);
        assert_eq!(OverlayStyle::compute(&state, 32.0, OverlayLayer::Dot).opacity, 1.0);
    }

    #[test]
    fn boundary_events_keep_the_last_position() {
        let mut state = PointerState::default();
        state.apply(PointerInput::Moved { x: 7.0, y: 9.0 });
        state.apply(PointerInput::Left);
        state.apply(PointerInput::Entered);
        assert_eq!(state.position, PointerPosition { x: 7.0, y: 9.0 });
    }

    #[test]
    fn trail_is_smaller_and_dimmer_around_the_same_center() {
        let mut state = PointerState::default();
        state.apply(PointerInput::Moved { x: 100.0, y: 50.0 });
        let trail = OverlayStyle::compute(&state, 40.0, OverlayLayer::Trail);
        assert_eq!(trail.diameter, 24.0);
        assert_eq!(trail.left, 88.0);
        assert_eq!(trail.top, 38.0);
        assert_eq!(trail.opacity, TRAIL_OPACITY);
    }

    #[test]
    fn blend_mode_names_round_trip_through_css_values() {
        for mode in [
            BlendMode::Normal,
            BlendMode::Difference,
            BlendMode::Exclusion,
            BlendMode::Multiply,
            BlendMode::Screen,
        ] {
            assert_eq!(BlendMode::from_name(mode.css_value()), Some(mode));
        }
        assert_eq!(BlendMode::from_name("overlay"), None);
    }
}
