//! Field registry with validation and a submit lifecycle.
//!
//! [`FormState`] is plain data: values, rules, touched flags and the
//! submitting flag. [`FormHandle`] shares one state between the fields
//! and the submit button of a rendered form.

mod component;
mod validation;

pub use component::*;
pub use validation::*;
