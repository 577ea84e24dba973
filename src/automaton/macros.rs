//! Macros for declarative transition table construction.

/// Build a [`TransitionGuard`](crate::automaton::TransitionGuard) from an
/// initial value and a list of edges.
///
/// # Example
///
/// ```
/// use vigil::transition_table;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Light {
///     Red,
///     Yellow,
///     Green,
/// }
///
/// let mut light = transition_table! {
///     initial: Light::Red;
///     Light::Red => Light::Green,
///     Light::Green => Light::Yellow,
///     Light::Yellow => Light::Red,
/// };
///
/// let (accepted, _) = light.try_update(Light::Green);
/// assert!(accepted);
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        initial: $initial:expr;
        $( $from:expr => $to:expr ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut guard = $crate::automaton::TransitionGuard::new($initial);
        $( guard.register_transition($from, $to); )*
        guard
    }};
}

#[cfg(test)]
mod tests {
    #[derive(Clone, PartialEq, Debug)]
    enum Step {
        One,
        Two,
        Three,
    }

    #[test]
    fn macro_builds_working_guard() {
        let mut guard = transition_table! {
            initial: Step::One;
            Step::One => Step::Two,
            Step::Two => Step::Three,
        };

        assert_eq!(guard.value(), &Step::One);
        let (accepted, _) = guard.try_update(Step::Two);
        assert!(accepted);
        let (accepted, _) = guard.try_update(Step::One);
        assert!(!accepted);
    }

    #[test]
    fn macro_accepts_empty_edge_list() {
        let guard = transition_table! {
            initial: Step::One;
        };

        assert!(guard.edges().is_empty());
    }
}
