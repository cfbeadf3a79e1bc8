mod component;
mod tracker;

pub use component::*;
pub use tracker::*;
