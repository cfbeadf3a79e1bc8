// Marquee Component
// Endless horizontal ticker that halts while hovered

use crate::dataflow::{relay, Actor};
use crate::tokens::*;
use zoon::*;

const FRAME_MS: u32 = 16;
pub const DEFAULT_MARQUEE_SPEED_SECS: u32 = 40;
pub const DEFAULT_MARQUEE_REPEAT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarqueeDirection {
    #[default]
    Left,
    Right,
}

/// Position of the ticker track within one loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeMotion {
    period_ms: u32,
    elapsed_ms: u32,
    direction: MarqueeDirection,
    repeat: usize,
    paused: bool,
}

impl MarqueeMotion {
    pub fn new(speed_secs: u32, direction: MarqueeDirection, repeat: usize) -> Self {
        Self {
            period_ms: speed_secs.saturating_mul(1000).max(1),
            elapsed_ms: 0,
            direction,
            repeat: repeat.max(1),
            paused: false,
        }
    }

    pub fn advance(&mut self, delta_ms: u32) {
        if !self.paused {
            self.elapsed_ms = (self.elapsed_ms + delta_ms % self.period_ms) % self.period_ms;
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Fraction of the current loop, 0 inclusive to 1 exclusive.
    pub fn progress(&self) -> f64 {
        f64::from(self.elapsed_ms) / f64::from(self.period_ms)
    }

    /// Track translation in percent of its own width.
    ///
    /// One loop shifts the track by exactly one copy of the content, so the
    /// wrap back to the start is invisible.
    pub fn offset_percent(&self) -> f64 {
        let copy_width = 100. / self.repeat as f64;
        match self.direction {
            MarqueeDirection::Left => -self.progress() * copy_width,
            MarqueeDirection::Right => -(1. - self.progress()) * copy_width,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum MarqueeCommand {
    Pause,
    Resume,
}

pub struct MarqueeBuilder {
    content: Option<Box<dyn Fn() -> RawElOrText>>,
    direction: MarqueeDirection,
    speed_secs: u32,
    repeat: usize,
}

impl MarqueeBuilder {
    pub fn new() -> Self {
        Self {
            content: None,
            direction: MarqueeDirection::default(),
            speed_secs: DEFAULT_MARQUEE_SPEED_SECS,
            repeat: DEFAULT_MARQUEE_REPEAT,
        }
    }

    /// Called once per repetition of the content.
    pub fn content<E: Element>(mut self, content: impl Fn() -> E + 'static) -> Self {
        self.content = Some(Box::new(move || content().unify()));
        self
    }

    pub fn direction(mut self, direction: MarqueeDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Seconds per loop, lower is faster.
    pub fn speed(mut self, seconds: u32) -> Self {
        self.speed_secs = seconds;
        self
    }

    pub fn repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn build(self) -> impl Element {
        let motion = MarqueeMotion::new(self.speed_secs, self.direction, self.repeat);
        let (commands, mut command_stream) = relay::<MarqueeCommand>();
        let ticker = Actor::new(motion, move |state| async move {
            loop {
                while let Ok(Some(command)) = command_stream.try_next() {
                    let paused = matches!(command, MarqueeCommand::Pause);
                    state.update_mut(|motion| motion.set_paused(paused));
                }
                Timer::sleep(FRAME_MS).await;
                if !state.lock_ref().is_paused() {
                    state.update_mut(|motion| motion.advance(FRAME_MS));
                }
            }
        });
        let offset = ticker.signal().map(|motion| motion.offset_percent());

        let copies = match &self.content {
            Some(content) => (0..motion.repeat)
                .map(|_| {
                    El::new()
                        .s(Padding::new().right(SPACING_32))
                        .update_raw_el(|raw_el| raw_el.style("flex-shrink", "0"))
                        .child(content())
                        .unify()
                })
                .collect(),
            None => Vec::new(),
        };

        El::new()
            .s(Width::fill())
            .s(Padding::new().y(SPACING_16))
            .s(Background::new().color(COLOR_CONCRETE))
            .s(Borders::new()
                .top(Border::new().width(BORDER_WIDTH_2).color(COLOR_LINE))
                .bottom(Border::new().width(BORDER_WIDTH_2).color(COLOR_LINE)))
            .update_raw_el(|raw_el| raw_el.attr("aria-hidden", "true").style("overflow", "hidden"))
            .on_hovered_change(move |hovered| {
                commands.send(if hovered {
                    MarqueeCommand::Pause
                } else {
                    MarqueeCommand::Resume
                })
            })
            .child(
                Row::new()
                    .s(Font::new().no_wrap())
                    .update_raw_el(|raw_el| {
                        raw_el
                            .style("width", "max-content")
                            .style_signal("transform", offset.map(|offset| format!("translateX({offset}%)")))
                    })
                    .items(copies),
            )
            .after_remove(move |_| drop(ticker))
    }
}

impl Default for MarqueeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn marquee() -> MarqueeBuilder {
    MarqueeBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_marquee_shifts_one_copy_per_loop() {
        let mut motion = MarqueeMotion::new(40, MarqueeDirection::Left, 4);
        assert_eq!(motion.offset_percent(), 0.);
        motion.advance(20_000);
        assert_eq!(motion.offset_percent(), -12.5);
        motion.advance(20_000);
        assert_eq!(motion.progress(), 0.);
    }

    #[test]
    fn right_marquee_runs_the_other_way() {
        let mut motion = MarqueeMotion::new(10, MarqueeDirection::Right, 2);
        assert_eq!(motion.offset_percent(), -50.);
        motion.advance(5_000);
        assert_eq!(motion.offset_percent(), -25.);
    }

    #[test]
    fn paused_marquee_holds_its_position() {
        let mut motion = MarqueeMotion::new(40, MarqueeDirection::Left, 3);
        motion.advance(1_000);
        motion.set_paused(true);
        motion.advance(5_000);
        assert_eq!(motion.progress(), 0.025);
        motion.set_paused(false);
        motion.advance(1_000);
        assert_eq!(motion.progress(), 0.05);
    }

    #[test]
    fn degenerate_settings_are_clamped() {
        let mut motion = MarqueeMotion::new(0, MarqueeDirection::Left, 0);
        motion.advance(123);
        assert_eq!(motion.progress(), 0.);
        assert_eq!(motion.repeat, 1);
    }
}
