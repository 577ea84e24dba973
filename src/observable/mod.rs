//! Change-observing value wrapping.
//!
//! This module contains `ObservingValue`: a value with two optional
//! callbacks, one fired after every assignment, one consulted (and able to
//! veto) when an assignment would change the value.

mod value;

pub use value::{AssignCallback, ChangeCallback, ObservingValue};
