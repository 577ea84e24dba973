//! Per-type default lifespans.
//!
//! The default lifespan is process-wide state scoped by payload type
//! identity: one mutable setting per wrapped type, lazily initialized on
//! first use. Different payload types can carry different defaults
//! simultaneously.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::HashMap;
use std::time::Duration;

/// Lifespan used for types that never registered a default.
const FALLBACK_LIFESPAN: Duration = Duration::from_secs(1);

static DEFAULTS: Lazy<RwLock<HashMap<TypeId, Duration>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Get the default lifespan for payload type `V`.
///
/// Returns one second if no default was ever registered for `V`.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use vigil::bounded::{default_lifespan, set_default_lifespan};
///
/// struct Toast(String);
///
/// assert_eq!(default_lifespan::<Toast>(), Duration::from_secs(1));
///
/// set_default_lifespan::<Toast>(Duration::from_secs(4));
/// assert_eq!(default_lifespan::<Toast>(), Duration::from_secs(4));
/// ```
pub fn default_lifespan<V: 'static>() -> Duration {
    DEFAULTS
        .read()
        .get(&TypeId::of::<V>())
        .copied()
        .unwrap_or(FALLBACK_LIFESPAN)
}

/// Set the default lifespan for payload type `V`.
///
/// Affects wrappers constructed after the call; existing wrappers keep the
/// lifespan they were born with.
pub fn set_default_lifespan<V: 'static>(lifespan: Duration) {
    DEFAULTS.write().insert(TypeId::of::<V>(), lifespan);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_type_falls_back_to_one_second() {
        struct Fresh;

        assert_eq!(default_lifespan::<Fresh>(), Duration::from_secs(1));
    }

    #[test]
    fn registered_default_is_returned() {
        struct Tuned;

        set_default_lifespan::<Tuned>(Duration::from_millis(250));
        assert_eq!(default_lifespan::<Tuned>(), Duration::from_millis(250));
    }

    #[test]
    fn defaults_are_independent_per_type() {
        struct Short;
        struct Long;

        set_default_lifespan::<Short>(Duration::from_millis(100));
        set_default_lifespan::<Long>(Duration::from_secs(60));

        assert_eq!(default_lifespan::<Short>(), Duration::from_millis(100));
        assert_eq!(default_lifespan::<Long>(), Duration::from_secs(60));
    }

    #[test]
    fn default_is_mutable_after_first_set() {
        struct Retuned;

        set_default_lifespan::<Retuned>(Duration::from_secs(2));
        set_default_lifespan::<Retuned>(Duration::from_secs(9));

        assert_eq!(default_lifespan::<Retuned>(), Duration::from_secs(9));
    }
}
