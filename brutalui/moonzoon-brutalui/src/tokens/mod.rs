// Design Token System for the brutalist component library
// Dark-only palette, hard shadows, monospace-first typography

pub mod color;
pub mod spacing;
pub mod typography;
pub mod border;
pub mod shadow;
pub mod animation;
pub mod opacity;
pub mod focus;

pub use color::*;
pub use spacing::*;
pub use typography::*;
pub use border::*;
pub use shadow::*;
pub use animation::*;
pub use opacity::*;
pub use focus::*;
