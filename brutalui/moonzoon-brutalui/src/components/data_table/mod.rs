//! Sortable, filterable, paginated table.
//!
//! [`derive_page`] is the whole row pipeline and does not touch the DOM.
//! [`settle_page`] wraps it and writes an out-of-range or reset page back
//! to the pagination [`StateSlot`]; the component only renders its output
//! and routes header and pager clicks back into the slots.

mod column;
mod component;
mod pipeline;
mod state;

pub use column::*;
pub use component::*;
pub use pipeline::*;
pub use state::*;
