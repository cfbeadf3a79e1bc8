// Brutalist component library
// Builders for the showcase plus the stateful trackers and table

pub mod button;
pub mod card;
pub mod custom_cursor;
pub mod data_table;
pub mod form;
pub mod icon;
pub mod input;
pub mod marquee;
pub mod preloader;
pub mod scroll_progress;
pub mod section;
pub mod select;
pub mod toast;
pub mod typography;

pub use button::*;
pub use card::*;
pub use custom_cursor::*;
pub use data_table::*;
pub use form::*;
pub use icon::*;
pub use input::*;
pub use marquee::*;
pub use preloader::*;
pub use scroll_progress::*;
pub use section::*;
pub use select::*;
pub use toast::*;
pub use typography::*;
