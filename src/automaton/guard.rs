//! The transition guard: a value that only moves along declared edges.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::trace;

/// A discrete value paired with a table of legal transitions.
///
/// The wrapped value is only ever replaced by a new value for which a
/// `(current, new)` edge has been registered. Anything else is silently
/// rejected; the caller learns the outcome from the boolean half of the
/// [`try_update`](TransitionGuard::try_update) result. There is no panic or
/// error path for an illegal transition.
///
/// Self-loops are not implicit: a value "transitions" to itself only if the
/// `(v, v)` edge was explicitly registered.
///
/// # Example
///
/// ```rust
/// use vigil::automaton::TransitionGuard;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Phase {
///     Idle,
///     Running,
///     Done,
/// }
///
/// let mut phase = TransitionGuard::new(Phase::Idle);
/// phase.register_transition(Phase::Idle, Phase::Running);
/// phase.register_transition(Phase::Running, Phase::Done);
///
/// let (accepted, _) = phase.try_update(Phase::Running);
/// assert!(accepted);
///
/// // Idle -> Done was never declared
/// let (accepted, value) = phase.try_update(Phase::Idle);
/// assert!(!accepted);
/// assert_eq!(value, Phase::Running);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionGuard<V> {
    value: V,
    edges: Vec<(V, V)>,
}

impl<V: Clone + PartialEq + Debug> TransitionGuard<V> {
    /// Create a guard holding `initial` with an empty transition table.
    ///
    /// A guard with no registered edges rejects every update; use
    /// [`reset`](TransitionGuard::reset) for unconditional (re)initialization.
    pub fn new(initial: V) -> Self {
        Self {
            value: initial,
            edges: Vec::new(),
        }
    }

    /// Declare `(from, to)` as a legal edge.
    ///
    /// The table has multiset semantics: registering the same edge twice is
    /// permitted and does not change behavior.
    pub fn register_transition(&mut self, from: V, to: V) {
        self.edges.push((from, to));
    }

    /// Unconditionally overwrite the current value, bypassing the table.
    ///
    /// This is the (re)initialization path, not a normal update.
    pub fn reset(&mut self, value: V) {
        self.value = value;
    }

    /// Check whether `(from, to)` is a registered edge.
    pub fn can_transition(&self, from: &V, to: &V) -> bool {
        self.edges.iter().any(|(f, t)| f == from && t == to)
    }

    /// Check whether the current value may transition to `to`.
    pub fn can_transition_to(&self, to: &V) -> bool {
        self.can_transition(&self.value, to)
    }

    /// Attempt to move to `new_value`.
    ///
    /// If `(current, new_value)` is a registered edge the value is replaced
    /// and `(true, new_value)` is returned. Otherwise the value is left
    /// exactly as it was and `(false, current)` is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vigil::automaton::TransitionGuard;
    ///
    /// let mut guard = TransitionGuard::new(1u8);
    /// guard.register_transition(1, 2);
    ///
    /// assert_eq!(guard.try_update(2), (true, 2));
    /// assert_eq!(guard.try_update(9), (false, 2));
    /// ```
    pub fn try_update(&mut self, new_value: V) -> (bool, V) {
        if self.can_transition_to(&new_value) {
            self.value = new_value;
            (true, self.value.clone())
        } else {
            trace!(from = ?self.value, to = ?new_value, "transition rejected");
            (false, self.value.clone())
        }
    }

    /// Get the current value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Get the registered edges in registration order.
    pub fn edges(&self) -> &[(V, V)] {
        &self.edges
    }
}

impl<V: Clone + PartialEq + Debug + Default> Default for TransitionGuard<V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
        Failed,
    }

    fn workflow_guard() -> TransitionGuard<TestState> {
        let mut guard = TransitionGuard::new(TestState::Initial);
        guard.register_transition(TestState::Initial, TestState::Processing);
        guard.register_transition(TestState::Processing, TestState::Complete);
        guard.register_transition(TestState::Processing, TestState::Failed);
        guard
    }

    #[test]
    fn registered_edge_is_accepted() {
        let mut guard = workflow_guard();

        let (accepted, value) = guard.try_update(TestState::Processing);

        assert!(accepted);
        assert_eq!(value, TestState::Processing);
        assert_eq!(guard.value(), &TestState::Processing);
    }

    #[test]
    fn unregistered_edge_is_rejected() {
        let mut guard = workflow_guard();

        // Initial -> Complete was never declared
        let (accepted, value) = guard.try_update(TestState::Complete);

        assert!(!accepted);
        assert_eq!(value, TestState::Initial);
        assert_eq!(guard.value(), &TestState::Initial);
    }

    #[test]
    fn rejection_leaves_state_untouched_across_attempts() {
        let mut guard = workflow_guard();

        for _ in 0..3 {
            let (accepted, _) = guard.try_update(TestState::Failed);
            assert!(!accepted);
            assert_eq!(guard.value(), &TestState::Initial);
        }
    }

    #[test]
    fn reset_bypasses_the_table() {
        let mut guard = workflow_guard();

        // Complete has no outgoing edges, reset still works from it
        guard.reset(TestState::Complete);
        assert_eq!(guard.value(), &TestState::Complete);

        guard.reset(TestState::Initial);
        assert_eq!(guard.value(), &TestState::Initial);
    }

    #[test]
    fn self_loop_requires_explicit_registration() {
        let mut guard = TransitionGuard::new(TestState::Initial);

        let (accepted, _) = guard.try_update(TestState::Initial);
        assert!(!accepted);

        guard.register_transition(TestState::Initial, TestState::Initial);
        let (accepted, _) = guard.try_update(TestState::Initial);
        assert!(accepted);
    }

    #[test]
    fn duplicate_registration_is_tolerated() {
        let mut guard = workflow_guard();
        guard.register_transition(TestState::Initial, TestState::Processing);

        let (accepted, value) = guard.try_update(TestState::Processing);

        assert!(accepted);
        assert_eq!(value, TestState::Processing);
    }

    #[test]
    fn can_transition_checks_arbitrary_pairs() {
        let guard = workflow_guard();

        assert!(guard.can_transition(&TestState::Processing, &TestState::Complete));
        assert!(!guard.can_transition(&TestState::Complete, &TestState::Processing));
    }

    #[test]
    fn can_transition_to_uses_current_value() {
        let mut guard = workflow_guard();

        assert!(guard.can_transition_to(&TestState::Processing));
        assert!(!guard.can_transition_to(&TestState::Complete));

        guard.try_update(TestState::Processing);
        assert!(guard.can_transition_to(&TestState::Complete));
    }

    #[test]
    fn default_uses_default_value() {
        let guard: TransitionGuard<u32> = TransitionGuard::default();
        assert_eq!(guard.value(), &0);
        assert!(guard.edges().is_empty());
    }

    #[test]
    fn guard_roundtrips_through_serde() {
        let guard = workflow_guard();

        let json = serde_json::to_string(&guard).unwrap();
        let restored: TransitionGuard<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.value(), guard.value());
        assert_eq!(restored.edges(), guard.edges());
    }
}
