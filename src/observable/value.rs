//! The observing value wrapper.

use tracing::trace;

/// Callback fired after every assignment, with the resulting value.
pub type AssignCallback<V> = Box<dyn Fn(&V) + Send + Sync>;

/// Callback consulted on value-changing assignments with `(old, new)`.
/// Returning `false` vetoes the change.
pub type ChangeCallback<V> = Box<dyn Fn(&V, &V) -> bool + Send + Sync>;

/// A value whose assignments are observed and optionally vetoed.
///
/// Every assignment runs the same synchronous decision procedure:
///
/// 1. If no change callback is registered, or the new value equals the
///    current one, there is no change to veto.
/// 2. Otherwise the change callback sees `(old, new)`; returning `false`
///    aborts the assignment entirely and the stored value is untouched.
/// 3. If not aborted, the new value is stored.
/// 4. The assign callback, if registered, fires exactly once with the
///    *resulting* value: the old value on a veto, the new one otherwise.
///
/// A veto is a normal outcome, reported through the boolean result of
/// [`assign`](ObservingValue::assign); there is no error or panic path.
///
/// # Example
///
/// ```rust
/// use vigil::ObservingValue;
///
/// let mut level = ObservingValue::new(0i32)
///     .on_change(|_old: &i32, new: &i32| *new >= 0);
///
/// assert!(level.assign(3));
/// assert_eq!(*level.value(), 3);
///
/// // negative levels are vetoed
/// assert!(!level.assign(-1));
/// assert_eq!(*level.value(), 3);
/// ```
pub struct ObservingValue<V> {
    value: V,
    assign: Option<AssignCallback<V>>,
    change: Option<ChangeCallback<V>>,
}

impl<V> ObservingValue<V> {
    /// Wrap `value` with no callbacks registered.
    pub fn new(value: V) -> Self {
        Self {
            value,
            assign: None,
            change: None,
        }
    }

    /// Register the assign callback, consuming and returning the wrapper
    /// for fluent configuration. Replaces any previous assign callback.
    pub fn on_assign<F>(mut self, callback: F) -> Self
    where
        F: Fn(&V) + Send + Sync + 'static,
    {
        self.assign = Some(Box::new(callback));
        self
    }

    /// Register the change callback, consuming and returning the wrapper
    /// for fluent configuration. Replaces any previous change callback.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&V, &V) -> bool + Send + Sync + 'static,
    {
        self.change = Some(Box::new(callback));
        self
    }

    /// Replace the assign callback on an existing wrapper.
    pub fn set_on_assign<F>(&mut self, callback: F)
    where
        F: Fn(&V) + Send + Sync + 'static,
    {
        self.assign = Some(Box::new(callback));
    }

    /// Replace the change callback on an existing wrapper.
    pub fn set_on_change<F>(&mut self, callback: F)
    where
        F: Fn(&V, &V) -> bool + Send + Sync + 'static,
    {
        self.change = Some(Box::new(callback));
    }

    /// Assign treating every call as a value change.
    ///
    /// This is the entry point for payload types without equality: the
    /// no-change short-circuit of [`assign`](ObservingValue::assign) needs
    /// `PartialEq`, so here the change callback is consulted on every call,
    /// equal values included.
    pub fn assign_as_changed(&mut self, new_value: V) -> bool {
        self.store(new_value, true)
    }

    /// Get the current value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consume the wrapper, returning the payload.
    pub fn into_inner(self) -> V {
        self.value
    }

    fn store(&mut self, new_value: V, changed: bool) -> bool {
        let accepted = if changed {
            match self.change.as_ref() {
                Some(change) => change(&self.value, &new_value),
                None => true,
            }
        } else {
            true
        };

        if accepted {
            self.value = new_value;
        } else {
            trace!("change vetoed, keeping current value");
        }

        if let Some(assign) = self.assign.as_ref() {
            assign(&self.value);
        }

        accepted
    }
}

impl<V: PartialEq> ObservingValue<V> {
    /// Assign a new value, running the full decision procedure.
    ///
    /// Returns `true` if the value was stored, `false` if the change
    /// callback vetoed it. The assign callback fires either way, with the
    /// resulting value.
    pub fn assign(&mut self, new_value: V) -> bool {
        let changed = new_value != self.value;
        self.store(new_value, changed)
    }

    /// A callable view of "assign into this wrapper".
    ///
    /// Usable wherever a plain one-argument sink callback is expected; each
    /// call forwards to [`assign`](ObservingValue::assign).
    ///
    /// # Example
    ///
    /// ```rust
    /// use vigil::ObservingValue;
    ///
    /// fn feed(mut sink: impl FnMut(u32)) {
    ///     sink(5);
    /// }
    ///
    /// let mut counter = ObservingValue::new(0u32);
    /// feed(counter.sink());
    /// assert_eq!(*counter.value(), 5);
    /// ```
    pub fn sink(&mut self) -> impl FnMut(V) + '_ {
        move |value| {
            self.assign(value);
        }
    }
}
