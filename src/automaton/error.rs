//! Build errors for the transition guard builder.

use thiserror::Error;

/// Errors that can occur when building a transition guard.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial value not specified. Call .initial(value) before .build()")]
    MissingInitialValue,

    #[error("No transition edges defined. Add at least one edge")]
    NoEdges,
}
