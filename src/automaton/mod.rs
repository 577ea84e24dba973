//! Finite-state transition guarding.
//!
//! This module contains the transition guard and its companions:
//! - `TransitionGuard` wraps a discrete value with a declared transition table
//! - `TransitionGuardBuilder` constructs guards fluently
//! - `TransitionLog` keeps an opt-in, timestamped trail of attempted updates
//!
//! Illegal transitions are not errors: they are silently rejected and
//! reported only through the boolean half of the result. Guards model
//! *attempted* transitions, not asserted-safe ones.

mod builder;
mod error;
mod guard;
mod log;
mod macros;

pub use builder::TransitionGuardBuilder;
pub use error::BuildError;
pub use guard::TransitionGuard;
pub use log::{TransitionLog, TransitionRecord};
