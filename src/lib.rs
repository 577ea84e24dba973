//! Vigil: guarded, time-bounded, and observable value wrappers
//!
//! Vigil is a collection of small, independent generic primitives meant to be
//! dropped into other codebases. Each one wraps a single value owned by one
//! logical caller; none of them compose into a system with data flow between
//! components.
//!
//! # Core Primitives
//!
//! - **TransitionGuard**: a value paired with a declared transition table;
//!   updates outside the table are silently rejected
//! - **BoundedLifetime**: a value with a birth timestamp and a lifespan,
//!   plus batch helpers for collections of such values
//! - **ObservingValue**: a value with an assignment callback and a
//!   veto-capable change callback
//!
//! Rejection is a normal outcome everywhere in this crate: illegal
//! transitions and vetoed changes are reported through return values, never
//! through errors or panics.
//!
//! # Example
//!
//! ```rust
//! use vigil::TransitionGuard;
//!
//! let mut door = TransitionGuard::new("closed");
//! door.register_transition("closed", "open");
//! door.register_transition("open", "closed");
//!
//! let (accepted, value) = door.try_update("open");
//! assert!(accepted);
//! assert_eq!(value, "open");
//!
//! // "ajar" was never declared, so the update is rejected
//! let (accepted, value) = door.try_update("ajar");
//! assert!(!accepted);
//! assert_eq!(value, "open");
//! ```

pub mod automaton;
pub mod bounded;
pub mod observable;

// Re-export the headline types
pub use automaton::{TransitionGuard, TransitionGuardBuilder};
pub use bounded::{BoundedLifetime, Clock, ManualClock, MonotonicClock};
pub use observable::ObservingValue;
