// Animation Token System

use zoon::*;

pub const DURATION_FAST: u32 = 100;
pub const DURATION_NORMAL: u32 = 200;
pub const DURATION_SLOW: u32 = 400;

pub fn transition_fast() -> impl Style<'static> {
    Transitions::new([Transition::all().duration(DURATION_FAST)])
}

pub fn transition_colors() -> impl Style<'static> {
    Transitions::new([
        Transition::property("background-color").duration(DURATION_NORMAL),
        Transition::property("border-color").duration(DURATION_NORMAL),
        Transition::property("color").duration(DURATION_NORMAL),
    ])
}

pub fn transition_transform() -> impl Style<'static> {
    Transitions::new([
        Transition::property("transform").duration(DURATION_FAST),
        Transition::property("box-shadow").duration(DURATION_FAST),
    ])
}

// Continuous spinner animation, one turn per `period`
pub fn create_spinner(period: Duration) -> Oscillator {
    let oscillator = Oscillator::new(period);
    oscillator.cycle_wrap();
    oscillator
}
