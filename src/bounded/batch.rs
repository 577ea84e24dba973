//! Batch operations over collections of bounded-lifetime values.
//!
//! These helpers operate on ordered sequences of wrappers. There is no
//! automatic background sweep anywhere in this crate: callers invoke
//! [`dispose`] explicitly, typically once per frame or tick.

use crate::bounded::clock::Clock;
use crate::bounded::wrapper::BoundedLifetime;
use std::time::Duration;
use tracing::trace;

/// Remove every dead element in place.
///
/// The relative order of surviving elements is preserved. Calling this twice
/// with no time elapsed is the same as calling it once.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use vigil::bounded::{dispose, BoundedLifetime, ManualClock};
///
/// let clock = ManualClock::new();
/// let mut sparks = vec![
///     BoundedLifetime::with_clock('a', Duration::from_secs(1), clock.clone()),
///     BoundedLifetime::with_clock('b', Duration::from_secs(5), clock.clone()),
/// ];
///
/// clock.advance(Duration::from_secs(2));
/// dispose(&mut sparks);
///
/// assert_eq!(sparks.len(), 1);
/// assert_eq!(sparks[0].value(), &'b');
/// ```
pub fn dispose<V, C: Clock>(entries: &mut Vec<BoundedLifetime<V, C>>) {
    let before = entries.len();
    entries.retain(|entry| entry.alive());
    let removed = before - entries.len();
    if removed > 0 {
        trace!(removed, "disposed expired entries");
    }
}

/// Reorder elements ascending by birth timestamp.
///
/// The sort is stable, so elements born at the same instant keep their
/// relative order.
pub fn sort_by_birth<V, C: Clock>(entries: &mut [BoundedLifetime<V, C>]) {
    entries.sort_by_key(|entry| entry.born());
}

/// Remaining time of the element with the longest configured lifespan.
///
/// Returns zero for an empty collection. Otherwise the element with the
/// greatest `lifespan` is selected (first one wins on ties) and *that*
/// element's `lifespan - age` is returned. This is not necessarily the
/// maximum remaining time across the collection, since a younger element
/// with a shorter lifespan may outlast the winner.
pub fn max_remaining_lifetime<V, C: Clock>(entries: &[BoundedLifetime<V, C>]) -> Duration {
    let mut longest: Option<&BoundedLifetime<V, C>> = None;
    for entry in entries {
        // strictly-greater keeps the first element on ties
        if longest.is_none_or(|best| entry.lifespan() > best.lifespan()) {
            longest = Some(entry);
        }
    }
    longest.map_or(Duration::ZERO, |entry| {
        entry.lifespan().saturating_sub(entry.age())
    })
}

/// Clone every value in `src` into `dst`, each with the default lifespan
/// registered for `V`.
pub fn copy_into<V: Clone + 'static>(src: &[V], dst: &mut Vec<BoundedLifetime<V>>) {
    dst.extend(src.iter().cloned().map(BoundedLifetime::new));
}

/// Clone every value in `src` into `dst`, with a per-value lifespan computed
/// from the value itself.
pub fn copy_into_with<V, F>(src: &[V], dst: &mut Vec<BoundedLifetime<V>>, lifespan: F)
where
    V: Clone,
    F: Fn(&V) -> Duration,
{
    dst.extend(src.iter().map(|value| {
        let lifespan = lifespan(value);
        BoundedLifetime::with_lifespan(value.clone(), lifespan)
    }));
}

/// Move every value out of `src` into `dst`, each with the default lifespan
/// registered for `V`. The source is left empty.
pub fn move_into<V: 'static>(src: &mut Vec<V>, dst: &mut Vec<BoundedLifetime<V>>) {
    dst.extend(src.drain(..).map(BoundedLifetime::new));
}

/// Move every value out of `src` into `dst`, with a per-value lifespan
/// computed from the value itself. The source is left empty.
pub fn move_into_with<V, F>(src: &mut Vec<V>, dst: &mut Vec<BoundedLifetime<V>>, lifespan: F)
where
    F: Fn(&V) -> Duration,
{
    dst.extend(src.drain(..).map(|value| {
        let lifespan = lifespan(&value);
        BoundedLifetime::with_lifespan(value, lifespan)
    }));
}
