//! # MoonZoon Brutalist Component Library
//!
//! Dark, hard-edged components for MoonZoon applications: acid accents,
//! offset shadows and monospace labels.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use moonzoon_brutalui::*;
//! use zoon::*;
//!
//! fn hero() -> impl Element {
//!     Column::new()
//!         .item(heading("Design System").level(1).size(HeadingSize::Xl5).build())
//!         .item(
//!             button()
//!                 .label("Explore")
//!                 .variant(ButtonVariant::Primary)
//!                 .end_icon(IconName::ArrowRight)
//!                 .on_press(|| zoon::println!("explore"))
//!                 .build(),
//!         )
//! }
//! ```
//!
//! ## Stateful components
//!
//! - **CustomCursor**: dot and trailing ring that follow the pointer and
//!   hide the native cursor while mounted
//! - **ScrollProgress**: fixed bar showing how far the page is scrolled
//! - **DataTable**: filter, sort and paginate rows, with controlled or
//!   uncontrolled table state
//! - **Toast**: timed notifications with hover pause
//! - **Form**: field registry with `required`/`email` rules and a submit lifecycle
//!
//! ## Presentational components
//!
//! Button, Card, Input, Select, Section, Typography, Icon, Marquee, Preloader.
//!
//! ## Design Tokens
//!
//! - **Colors**: static dark palette with hot pink, electric blue and acid accents
//! - **Spacing**: 0 to 128px scale
//! - **Typography**: mono and sans families, size scale, wide tracking
//! - **Borders** and **Shadows**: 1-4px borders, hard offset shadows

pub mod components;
pub mod dataflow;
pub mod dom;
pub mod tokens;

// Re-export all components for easy access
pub use components::*;

// Re-export all tokens for easy access
pub use tokens::*;

// Re-export zoon for convenience
pub use zoon;
