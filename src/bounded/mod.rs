//! Time-bounded value lifetimes.
//!
//! This module contains the bounded-lifetime wrapper and its companions:
//! - `BoundedLifetime` wraps a value with a birth timestamp and a lifespan
//! - `Clock` abstracts the time source; `MonotonicClock` is the process-wide
//!   default and `ManualClock` supports deterministic tests
//! - a per-type default-lifespan registry
//! - batch helpers for collections of wrapped values (`dispose`,
//!   `sort_by_birth`, `max_remaining_lifetime`, populate helpers)
//!
//! All queries are evaluated against the clock at call time, never cached:
//! two calls a moment apart may return different results. There is no
//! background sweep; callers evict expired entries explicitly with
//! [`dispose`], typically once per frame or tick.

mod batch;
mod clock;
mod defaults;
mod wrapper;

pub use batch::{
    copy_into, copy_into_with, dispose, max_remaining_lifetime, move_into, move_into_with,
    sort_by_birth,
};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use defaults::{default_lifespan, set_default_lifespan};
pub use wrapper::BoundedLifetime;
