//! Builder for constructing transition guards.

use crate::automaton::error::BuildError;
use crate::automaton::guard::TransitionGuard;
use std::fmt::Debug;

/// Builder for constructing transition guards with a fluent API.
///
/// Direct construction via [`TransitionGuard::new`] permits an empty table;
/// the builder insists on an initial value and at least one edge.
///
/// # Example
///
/// ```rust
/// use vigil::automaton::TransitionGuardBuilder;
///
/// let door = TransitionGuardBuilder::new()
///     .initial("closed")
///     .edge("closed", "open")
///     .edge("open", "closed")
///     .build()
///     .unwrap();
///
/// assert_eq!(door.value(), &"closed");
/// ```
pub struct TransitionGuardBuilder<V> {
    initial: Option<V>,
    edges: Vec<(V, V)>,
}

impl<V: Clone + PartialEq + Debug> TransitionGuardBuilder<V> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            edges: Vec::new(),
        }
    }

    /// Set the initial value (required).
    pub fn initial(mut self, value: V) -> Self {
        self.initial = Some(value);
        self
    }

    /// Declare a single legal edge.
    pub fn edge(mut self, from: V, to: V) -> Self {
        self.edges.push((from, to));
        self
    }

    /// Declare multiple legal edges at once.
    pub fn edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Build the guard.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<TransitionGuard<V>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialValue)?;

        if self.edges.is_empty() {
            return Err(BuildError::NoEdges);
        }

        let mut guard = TransitionGuard::new(initial);
        for (from, to) in self.edges {
            guard.register_transition(from, to);
        }

        Ok(guard)
    }
}

impl<V: Clone + PartialEq + Debug> Default for TransitionGuardBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
