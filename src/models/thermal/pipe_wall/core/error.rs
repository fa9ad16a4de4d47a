use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while constructing a [`Behavior`](super::Behavior).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BehaviorError {
    /// The shell must be split into at least one cell.
    #[error("cell count must be positive, got {cells}")]
    InvalidCellCount { cells: usize },

    /// The outer radius does not exceed the inner radius.
    #[error("outer radius must exceed inner radius")]
    InvertedRadii,

    /// A physical parameter is outside its valid range.
    #[error("invalid {name}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,

        #[source]
        source: ConstraintError,
    },
}

impl BehaviorError {
    /// Returns a closure tagging a [`ConstraintError`] with the parameter name.
    pub(super) fn parameter(name: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { name, source }
    }
}

/// Errors that can occur while running a pipe wall simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// The parameters do not describe a valid model.
    #[error("invalid configuration")]
    InvalidConfiguration(#[from] BehaviorError),

    /// The temperature sequence does not match the number of cells.
    #[error("expected {expected} temperatures, got {actual}")]
    SequenceLengthMismatch {
        /// Required number of values.
        expected: usize,

        /// Number of values supplied.
        actual: usize,
    },
}
