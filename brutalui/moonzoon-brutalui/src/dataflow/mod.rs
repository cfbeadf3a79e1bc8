//! Event channels and task-owned state used by components with timers.
//!
//! - [`Relay`] carries events from UI callbacks into a task.
//! - [`Actor`] owns a `Mutable` that only its task writes; the task is
//!   cancelled when the last clone of the actor is dropped.

pub mod actor;
pub mod relay;

pub use actor::Actor;
pub use relay::{relay, Relay};
