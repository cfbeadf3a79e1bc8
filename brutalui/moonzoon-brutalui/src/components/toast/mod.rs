//! Transient notifications stacked in the top-right corner.

mod component;
mod queue;

pub use component::*;
pub use queue::*;
